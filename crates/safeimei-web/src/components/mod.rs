//! Reusable UI components

pub mod footer;
pub mod form_field;
pub mod icons;
pub mod loading;
pub mod navbar;
pub mod notification_modal;
pub mod portal_layout;
pub mod simple_page;

pub use footer::Footer;
pub use form_field::{FieldError, WizardInput, WizardSelect, WizardTextArea};
pub use icons::ShieldCheckIcon;
pub use loading::Spinner;
pub use navbar::Navbar;
pub use notification_modal::NotificationModal;
pub use portal_layout::PortalLayout;
pub use simple_page::SimplePage;
