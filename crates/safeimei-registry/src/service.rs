//! The registry boundary trait

use crate::error::RegistryResult;
use async_trait::async_trait;
use safeimei_types::{LookupResult, Report, ReportSubmission, SubmissionReceipt};
use serde::{Deserialize, Serialize};

/// Everything the front end asks of the registry
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded executor and hold JS timers.
#[async_trait(?Send)]
pub trait RegistryService: Send + Sync {
    /// Classify an IMEI as stolen or safe
    async fn lookup_imei(&self, imei: &str) -> RegistryResult<LookupResult>;

    /// Check station credentials and open a session
    async fn authenticate(&self, station_id: &str, password: &str) -> RegistryResult<AuthSession>;

    /// Confirm the one-time code sent after sign-in
    async fn verify_otp(&self, code: &str) -> RegistryResult<()>;

    /// File a completed report
    async fn submit_report(&self, submission: &ReportSubmission) -> RegistryResult<SubmissionReceipt>;

    /// Reports filed by the signed-in station, narrowed by `filter`
    async fn list_station_reports(&self, filter: &str) -> RegistryResult<Vec<Report>>;

    /// Get service name
    fn name(&self) -> &str;
}

/// An opened officer session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Station the officer signed in for
    pub station_id: String,
    /// Opaque token for later calls
    pub session_token: String,
}
