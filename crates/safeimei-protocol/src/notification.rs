//! Notification sink used by forms that report success

/// Heading shown after a report is filed
pub const REPORT_SUBMITTED_TITLE: &str = "Report Submitted";
/// Body shown after a report is filed
pub const REPORT_SUBMITTED_MESSAGE: &str = "The report has been successfully submitted for review.";
/// Heading shown after the contact form is sent
pub const MESSAGE_SENT_TITLE: &str = "Message Sent!";
/// Body shown after the contact form is sent
pub const MESSAGE_SENT_MESSAGE: &str =
    "Thank you for contacting us. We will get back to you shortly.";

/// Receiver for user-facing success notifications
///
/// Forms call this instead of touching shell state directly, so they work
/// against any renderer (or a recorder in tests).
pub trait NotificationSink {
    /// Show a notification with `title` and `message`
    fn notify(&self, title: &str, message: &str);
}

/// Sink that records every notification, for tests and previews
#[derive(Debug, Default)]
pub struct RecordingSink {
    seen: std::cell::RefCell<Vec<(String, String)>>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first
    pub fn notifications(&self) -> Vec<(String, String)> {
        self.seen.borrow().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, title: &str, message: &str) {
        self.seen
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}
