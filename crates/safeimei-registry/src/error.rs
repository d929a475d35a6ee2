//! Error types for registry calls

use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors a registry call can surface to the UI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry could not be reached
    #[error("Registry unavailable: {reason}")]
    Unavailable {
        /// What went wrong
        reason: String,
    },

    /// The call did not finish in time
    #[error("Registry call timed out after {millis}ms")]
    Timeout {
        /// Elapsed time budget
        millis: u64,
    },

    /// Station ID and password were not accepted
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The one-time code was not accepted
    #[error("Verification code rejected")]
    VerificationFailed,

    /// A required value was missing
    #[error("Validation error: {field} - {message}")]
    Validation {
        /// Offending input
        field: String,
        /// Explanation shown to the user
        message: String,
    },
}

impl RegistryError {
    /// Build a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Inline text for the form that made the call
    pub fn user_message(&self) -> String {
        match self {
            Self::Unavailable { .. } => {
                "The registry is currently unavailable. Please try again later.".to_string()
            }
            Self::Timeout { .. } => "The request timed out. Please try again.".to_string(),
            Self::AuthenticationFailed => "Invalid Station ID or Password.".to_string(),
            Self::VerificationFailed => "The verification code is incorrect.".to_string(),
            Self::Validation { message, .. } => message.clone(),
        }
    }

    /// Whether retrying the same call may succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(
            RegistryError::Timeout { millis: 1500 }.to_string(),
            "Registry call timed out after 1500ms"
        );
        assert_eq!(
            RegistryError::validation("imei", "IMEI is required.").to_string(),
            "Validation error: imei - IMEI is required."
        );
    }

    #[test]
    fn test_user_message_is_distinct_from_missing_field() {
        let auth = RegistryError::AuthenticationFailed.user_message();
        let missing = RegistryError::validation("stationId", "Please enter both Station ID and Password.")
            .user_message();
        assert_ne!(auth, missing);
        assert_eq!(missing, "Please enter both Station ID and Password.");
    }

    #[test]
    fn test_retryable() {
        assert!(RegistryError::Timeout { millis: 1 }.is_retryable());
        assert!(
            RegistryError::Unavailable {
                reason: "offline".to_string()
            }
            .is_retryable()
        );
        assert!(!RegistryError::AuthenticationFailed.is_retryable());
        assert!(!RegistryError::VerificationFailed.is_retryable());
        assert!(!RegistryError::validation("imei", "IMEI is required.").is_retryable());
    }
}
