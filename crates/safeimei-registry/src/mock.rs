//! In-memory registry backed by fixture data

use crate::delay::sleep;
use crate::error::{RegistryError, RegistryResult};
use crate::service::{AuthSession, RegistryService};
use async_trait::async_trait;
use parking_lot::Mutex;
use safeimei_core::RegistryConfig;
use safeimei_protocol::{classify_imei, filter_reports, station_reports};
use safeimei_types::{
    LookupResult, Report, ReportStatus, ReportSubmission, SubmissionReceipt,
};
use std::time::Duration;
use uuid::Uuid;

/// Fixture reports occupy `RPT001`..`RPT004`
const FIRST_ASSIGNED_ID: u32 = 5;

/// Call counters kept by the mock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// IMEI lookups answered
    pub lookups: u64,
    /// Sign-in attempts
    pub authentications: u64,
    /// Code verifications
    pub verifications: u64,
    /// Reports filed
    pub submissions: u64,
    /// Listing requests
    pub listings: u64,
    /// Calls that returned an error
    pub failures: u64,
}

#[derive(Debug)]
struct MockState {
    stats: RegistryStats,
    next_id: u32,
    filed: Vec<ReportSubmission>,
}

/// Registry that answers from fixtures after a simulated delay
///
/// Any non-empty station ID and password sign in, every code verifies unless
/// [`MockRegistry::with_expected_code`] pins one, and only
/// [`safeimei_protocol::STOLEN_FIXTURE_IMEI`] looks up as stolen.
#[derive(Debug)]
pub struct MockRegistry {
    delays: RegistryConfig,
    timeout: Option<Duration>,
    failure: Option<RegistryError>,
    expected_code: Option<String>,
    state: Mutex<MockState>,
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRegistry {
    /// Create a registry with the default delays
    pub fn new() -> Self {
        Self::from_config(&RegistryConfig::default())
    }

    /// Create a registry with the configured delays
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            delays: *config,
            timeout: None,
            failure: None,
            expected_code: None,
            state: Mutex::new(MockState {
                stats: RegistryStats::default(),
                next_id: FIRST_ASSIGNED_ID,
                filed: Vec::new(),
            }),
        }
    }

    /// Use the same delay for every call
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.delays = RegistryConfig {
            lookup_delay_ms: millis,
            auth_delay_ms: millis,
            submit_delay_ms: millis,
        };
        self
    }

    /// Fail any call whose delay would exceed `timeout`
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Make every call fail with `error`
    #[must_use]
    pub fn with_failure(mut self, error: RegistryError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Accept only `code` at the verification step
    #[must_use]
    pub fn with_expected_code(mut self, code: impl Into<String>) -> Self {
        self.expected_code = Some(code.into());
        self
    }

    /// Counters so far
    pub fn stats(&self) -> RegistryStats {
        self.state.lock().stats.clone()
    }

    /// Reports filed during this session, oldest first
    pub fn filed_reports(&self) -> Vec<ReportSubmission> {
        self.state.lock().filed.clone()
    }

    /// Wait out the simulated latency, then apply any forced failure
    async fn simulate(&self, delay: Duration) -> RegistryResult<()> {
        if let Some(timeout) = self.timeout
            && delay > timeout
        {
            sleep(timeout).await;
            let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            return Err(self.record_failure(RegistryError::Timeout { millis }));
        }

        sleep(delay).await;

        match &self.failure {
            Some(error) => Err(self.record_failure(error.clone())),
            None => Ok(()),
        }
    }

    fn record_failure(&self, error: RegistryError) -> RegistryError {
        self.state.lock().stats.failures += 1;
        tracing::warn!(registry = self.name(), error = %error, "registry call failed");
        error
    }
}

#[async_trait(?Send)]
impl RegistryService for MockRegistry {
    async fn lookup_imei(&self, imei: &str) -> RegistryResult<LookupResult> {
        self.state.lock().stats.lookups += 1;
        if imei.is_empty() {
            return Err(self.record_failure(RegistryError::validation(
                "imei",
                "Please enter an IMEI number.",
            )));
        }

        self.simulate(self.delays.lookup_delay()).await?;

        let result = classify_imei(imei);
        tracing::info!(status = %result.status, "IMEI lookup completed");
        Ok(result)
    }

    async fn authenticate(&self, station_id: &str, password: &str) -> RegistryResult<AuthSession> {
        self.state.lock().stats.authentications += 1;
        if station_id.is_empty() || password.is_empty() {
            return Err(self.record_failure(RegistryError::validation(
                "stationId",
                "Please enter both Station ID and Password.",
            )));
        }

        self.simulate(self.delays.auth_delay()).await?;

        tracing::info!(station_id, "station signed in");
        Ok(AuthSession {
            station_id: station_id.to_string(),
            session_token: Uuid::new_v4().to_string(),
        })
    }

    async fn verify_otp(&self, code: &str) -> RegistryResult<()> {
        self.state.lock().stats.verifications += 1;
        self.simulate(self.delays.auth_delay()).await?;

        if let Some(expected) = &self.expected_code
            && code != expected
        {
            return Err(self.record_failure(RegistryError::VerificationFailed));
        }

        tracing::info!(digits = code.len(), "verification code accepted");
        Ok(())
    }

    async fn submit_report(&self, submission: &ReportSubmission) -> RegistryResult<SubmissionReceipt> {
        if submission.imei().is_empty() {
            return Err(self.record_failure(RegistryError::validation(
                "imei",
                "IMEI, brand, and model are required.",
            )));
        }

        self.simulate(self.delays.submit_delay()).await?;

        let id = {
            let mut state = self.state.lock();
            let id = format!("RPT{:03}", state.next_id);
            state.next_id += 1;
            state.stats.submissions += 1;
            state.filed.push(submission.clone());
            id
        };

        tracing::info!(report_id = %id, "report filed");
        Ok(SubmissionReceipt {
            id,
            status: ReportStatus::Stolen,
        })
    }

    async fn list_station_reports(&self, filter: &str) -> RegistryResult<Vec<Report>> {
        self.state.lock().stats.listings += 1;
        self.simulate(self.delays.lookup_delay()).await?;

        let reports = station_reports();
        let matched: Vec<Report> = filter_reports(&reports, filter)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(filter, count = matched.len(), "station reports listed");
        Ok(matched)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use safeimei_types::{LookupStatus, ReportDraft, ReportField};

    fn instant() -> MockRegistry {
        MockRegistry::new().with_delay(Duration::ZERO)
    }

    fn submission(imei: &str) -> ReportSubmission {
        let mut fields = ReportDraft::new();
        fields.set(ReportField::Imei, imei);
        fields.set(ReportField::TransactionRef, "TX-1");
        fields.set(ReportField::Terms, "true");
        ReportSubmission { fields }
    }

    #[tokio::test]
    async fn test_lookup_classification() {
        let registry = instant();

        let stolen = registry.lookup_imei("123456789012345").await.unwrap();
        assert_eq!(stolen.status, LookupStatus::Stolen);

        let safe = registry.lookup_imei("000000000000000").await.unwrap();
        assert_eq!(safe.status, LookupStatus::Safe);

        assert_eq!(registry.stats().lookups, 2);
    }

    #[tokio::test]
    async fn test_lookup_rejects_empty_input() {
        let registry = instant();
        let err = registry.lookup_imei("").await.unwrap_err();
        assert!(matches!(err, RegistryError::Validation { .. }));
        assert_eq!(registry.stats().failures, 1);
    }

    #[tokio::test]
    async fn test_any_non_empty_credentials_sign_in() {
        let registry = instant();
        let session = registry.authenticate("LAG-017", "pw").await.unwrap();

        assert_eq!(session.station_id, "LAG-017");
        assert!(Uuid::parse_str(&session.session_token).is_ok());

        let other = registry.authenticate("LAG-017", "pw").await.unwrap();
        assert_ne!(session.session_token, other.session_token);
    }

    #[tokio::test]
    async fn test_empty_credentials_rejected() {
        let registry = instant();
        assert!(matches!(
            registry.authenticate("", "pw").await,
            Err(RegistryError::Validation { .. })
        ));
        assert!(matches!(
            registry.authenticate("LAG-017", "").await,
            Err(RegistryError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_every_code_verifies() {
        let registry = instant();
        registry.verify_otp("").await.unwrap();
        registry.verify_otp("000000").await.unwrap();
        assert_eq!(registry.stats().verifications, 2);
    }

    #[tokio::test]
    async fn test_pinned_code_rejects_others() {
        let registry = instant().with_expected_code("482913");

        let err = registry.verify_otp("000000").await.unwrap_err();
        assert_eq!(err, RegistryError::VerificationFailed);
        assert_eq!(err.user_message(), "The verification code is incorrect.");
        assert!(!err.is_retryable());

        registry.verify_otp("482913").await.unwrap();
        assert_eq!(registry.stats().verifications, 2);
        assert_eq!(registry.stats().failures, 1);
    }

    #[tokio::test]
    async fn test_submissions_get_sequential_ids() {
        let registry = instant();

        let first = registry.submit_report(&submission("356938035643809")).await.unwrap();
        let second = registry.submit_report(&submission("356938035643810")).await.unwrap();

        assert_eq!(first.id, "RPT005");
        assert_eq!(second.id, "RPT006");
        assert_eq!(first.status, ReportStatus::Stolen);
        assert_eq!(registry.filed_reports().len(), 2);
    }

    #[tokio::test]
    async fn test_filed_reports_do_not_join_listing() {
        let registry = instant();
        registry.submit_report(&submission("999999999999999")).await.unwrap();

        let listed = registry.list_station_reports("").await.unwrap();
        assert_eq!(listed.len(), 4);
    }

    #[tokio::test]
    async fn test_listing_applies_filter() {
        let registry = instant();
        let listed = registry.list_station_reports("samsung").await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RPT001"]);
    }

    #[tokio::test]
    async fn test_forced_failure() {
        let registry = instant().with_failure(RegistryError::AuthenticationFailed);
        let err = registry.authenticate("LAG-017", "pw").await.unwrap_err();

        assert_eq!(err, RegistryError::AuthenticationFailed);
        assert_eq!(err.user_message(), "Invalid Station ID or Password.");
        assert_eq!(registry.stats().failures, 1);
    }

    #[tokio::test]
    async fn test_failed_submission_does_not_consume_id() {
        let registry = instant().with_failure(RegistryError::Unavailable {
            reason: "maintenance".to_string(),
        });
        assert!(registry.submit_report(&submission("1")).await.is_err());
        assert!(registry.filed_reports().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_when_delay_exceeds_budget() {
        let registry = MockRegistry::new()
            .with_delay(Duration::from_secs(5))
            .with_timeout(Duration::from_millis(250));

        let err = registry.lookup_imei("123456789012345").await.unwrap_err();
        assert_eq!(err, RegistryError::Timeout { millis: 250 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_listing_is_retryable() {
        let registry = MockRegistry::new().with_timeout(Duration::from_millis(100));

        let err = registry.list_station_reports("").await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.user_message(), "The request timed out. Please try again.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_lookup_delay_is_observed() {
        let registry = MockRegistry::new();
        let started = tokio::time::Instant::now();

        registry.lookup_imei("000000000000000").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_name() {
        assert_eq!(MockRegistry::default().name(), "mock");
    }
}
