//! Notification and inline validation state

use crate::report::ReportField;
use serde::{Deserialize, Serialize};

/// The single success notification owned by the shell
///
/// There is no queue: showing a notification while one is visible replaces
/// its content in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationState {
    /// Whether the modal is displayed
    pub visible: bool,
    /// Modal heading
    pub title: String,
    /// Modal body
    pub message: String,
}

impl NotificationState {
    /// A visible notification
    pub fn shown(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            visible: true,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// The one active validation error of the wizard step on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepValidationError {
    /// Field the message is displayed under
    pub field: ReportField,
    /// Message text
    pub message: String,
}

impl StepValidationError {
    /// Create an error for `field`
    pub fn new(field: ReportField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
