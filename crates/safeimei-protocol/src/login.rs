//! Officer sign-in form

use thiserror::Error;

/// Reasons the login form refuses to continue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Station ID or password left blank
    #[error("Please enter both Station ID and Password.")]
    MissingCredentials,
}

/// Values typed into the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Police station identifier
    pub station_id: String,
    /// Officer password
    pub password: String,
}

impl LoginForm {
    /// Build a form from raw input
    pub fn new(station_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            password: password.into(),
        }
    }

    /// Presence check only; credentials are never compared to anything here
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingCredentials`] if either field is empty.
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.station_id.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_both_fields_required() {
        assert_eq!(
            LoginForm::new("", "secret").validate(),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            LoginForm::new("LAG-001", "").validate(),
            Err(LoginError::MissingCredentials)
        );
        assert!(LoginForm::default().validate().is_err());
    }

    #[test]
    fn test_any_non_empty_pair_passes() {
        assert_eq!(LoginForm::new("x", "y").validate(), Ok(()));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            LoginError::MissingCredentials.to_string(),
            "Please enter both Station ID and Password."
        );
    }
}
