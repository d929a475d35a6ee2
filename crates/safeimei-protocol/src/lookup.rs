//! IMEI classification rule used by the in-browser registry

use safeimei_types::{LookupResult, LookupStatus};

/// The only IMEI on the stolen list
pub const STOLEN_FIXTURE_IMEI: &str = "123456789012345";

/// Classify `imei` against the fixture list
///
/// Only an exact match counts; surrounding whitespace is not stripped.
pub fn classify_imei(imei: &str) -> LookupResult {
    let status = if imei == STOLEN_FIXTURE_IMEI {
        LookupStatus::Stolen
    } else {
        LookupStatus::Safe
    };
    LookupResult::from_status(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_fixture_imei_is_stolen() {
        let result = classify_imei("123456789012345");
        assert_eq!(result.status, LookupStatus::Stolen);
        assert_eq!(result.title(), "Warning!");
    }

    #[test]
    fn test_other_imei_is_safe() {
        let result = classify_imei("000000000000000");
        assert_eq!(result.status, LookupStatus::Safe);
        assert_eq!(result.title(), "All Clear!");
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(classify_imei(" 123456789012345").status, LookupStatus::Safe);
        assert_eq!(classify_imei("12345678901234").status, LookupStatus::Safe);
    }

    proptest! {
        #[test]
        fn test_everything_else_is_safe(imei in "[0-9]{15}") {
            prop_assume!(imei != STOLEN_FIXTURE_IMEI);
            prop_assert_eq!(classify_imei(&imei).status, LookupStatus::Safe);
        }
    }
}
