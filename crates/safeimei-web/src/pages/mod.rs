//! Page components for the web interface

pub mod about;
pub mod contact;
pub mod create_report;
pub mod dashboard;
pub mod faq;
pub mod home;
pub mod login;
pub mod otp;
pub mod privacy;
pub mod view_reports;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use create_report::CreateReportPage;
pub use dashboard::DashboardPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use otp::OtpPage;
pub use privacy::PrivacyPage;
pub use view_reports::ViewReportsPage;
