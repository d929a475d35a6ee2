//! Station report fixtures and the viewer's search filter

use chrono::NaiveDate;
use safeimei_types::{Report, ReportStatus};

fn fixture(
    id: &str,
    imei: &str,
    brand: &str,
    model: &str,
    (y, m, d): (i32, u32, u32),
    status: ReportStatus,
) -> Report {
    Report {
        id: id.to_string(),
        imei: imei.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        date_reported: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        status,
    }
}

/// Reports filed by the signed-in station, newest first
pub fn station_reports() -> Vec<Report> {
    vec![
        fixture(
            "RPT001",
            "123456789012345",
            "Samsung",
            "Galaxy S22",
            (2025, 9, 10),
            ReportStatus::Stolen,
        ),
        fixture(
            "RPT002",
            "987654321098765",
            "Apple",
            "iPhone 15 Pro",
            (2025, 9, 8),
            ReportStatus::Stolen,
        ),
        fixture(
            "RPT003",
            "555566667777888",
            "Tecno",
            "Camon 20",
            (2025, 9, 5),
            ReportStatus::Recovered,
        ),
        fixture(
            "RPT004",
            "112233445566778",
            "Infinix",
            "Note 30",
            (2025, 9, 2),
            ReportStatus::Stolen,
        ),
    ]
}

/// Reports whose IMEI, brand or model contains `term`, ignoring case
///
/// Order is preserved and an empty term matches everything.
pub fn filter_reports<'a>(reports: &'a [Report], term: &str) -> Vec<&'a Report> {
    let needle = term.to_lowercase();
    reports
        .iter()
        .filter(|r| {
            [&r.imei, &r.brand, &r.model]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn ids(reports: &[&Report]) -> Vec<String> {
        reports.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_brand_filter() {
        let reports = station_reports();
        assert_eq!(ids(&filter_reports(&reports, "Samsung")), vec!["RPT001"]);
    }

    #[test]
    fn test_no_match() {
        let reports = station_reports();
        assert!(filter_reports(&reports, "zzz").is_empty());
    }

    #[test]
    fn test_case_insensitive_model_and_imei() {
        let reports = station_reports();
        assert_eq!(ids(&filter_reports(&reports, "IPHONE")), vec!["RPT002"]);
        assert_eq!(ids(&filter_reports(&reports, "5556")), vec!["RPT003"]);
    }

    #[test]
    fn test_empty_term_keeps_fixture_order() {
        let reports = station_reports();
        assert_eq!(
            ids(&filter_reports(&reports, "")),
            vec!["RPT001", "RPT002", "RPT003", "RPT004"]
        );
    }

    #[test]
    fn test_fixture_dates() {
        let reports = station_reports();
        assert_eq!(
            reports.first().map(|r| r.date_reported.to_string()),
            Some("2025-09-10".to_string())
        );
    }

    proptest! {
        #[test]
        fn test_filter_never_grows_or_mutates(term in ".{0,6}") {
            let reports = station_reports();
            let before = reports.clone();
            let hits = filter_reports(&reports, &term);
            prop_assert!(hits.len() <= reports.len());
            prop_assert_eq!(reports, before);
        }
    }
}
