//! Pure data types for the SafeIMEI front end
//!
//! Everything here is plain data: page identifiers, report fields and drafts,
//! lookup results and notification state. Behaviour lives in
//! `safeimei-protocol`; this crate has no I/O and no async.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod error;
pub mod lookup;
pub mod notification;
pub mod page;
pub mod report;

pub use error::{Result, TypesError};
pub use lookup::{LookupResult, LookupStatus};
pub use notification::{NotificationState, StepValidationError};
pub use page::PageId;
pub use report::{
    Report, ReportDraft, ReportField, ReportStatus, ReportSubmission, SubmissionReceipt,
    WizardStep,
};
