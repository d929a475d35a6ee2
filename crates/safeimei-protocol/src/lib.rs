//! State machines and business rules for the SafeIMEI front end
//!
//! Every transition in here is synchronous and free of I/O so it can be
//! exercised without a browser. The web crate holds these values in reactive
//! signals and calls the methods below from its event handlers.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod faq;
pub mod login;
pub mod lookup;
pub mod navigation;
pub mod notification;
pub mod otp;
pub mod reports;
pub mod request;
pub mod wizard;

pub use faq::{FAQ_ENTRIES, FaqAccordion, FaqEntry};
pub use login::{LoginError, LoginForm};
pub use lookup::{STOLEN_FIXTURE_IMEI, classify_imei};
pub use navigation::{Action, AppState, NavigationState, reduce};
pub use notification::{NotificationSink, RecordingSink};
pub use otp::{OTP_LENGTH, OtpCode, OtpKey};
pub use reports::{filter_reports, station_reports};
pub use request::RequestState;
pub use wizard::{DEVICE_BRANDS, DEVICE_COLORS, INCIDENT_TYPES, ReportWizard, StepOutcome};
