//! Error type for parsing and constructing the pure data types

use thiserror::Error;

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, TypesError>;

/// Errors raised while turning raw strings into typed values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// A page slug that names no known page
    #[error("Unknown page: {slug}")]
    UnknownPage {
        /// The slug that failed to parse
        slug: String,
    },

    /// A form field name that names no report field
    #[error("Unknown report field: {name}")]
    UnknownField {
        /// The field name that failed to parse
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TypesError::UnknownPage {
                slug: "settings".to_string()
            }
            .to_string(),
            "Unknown page: settings"
        );
        assert_eq!(
            TypesError::UnknownField {
                name: "nickname".to_string()
            }
            .to_string(),
            "Unknown report field: nickname"
        );
    }
}
