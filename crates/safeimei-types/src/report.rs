//! Report fields, wizard steps, drafts and stored reports

use crate::error::{Result, TypesError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// A single input collected by the report wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportField {
    /// Owner's full name
    FullName,
    /// Owner's phone number
    PhoneNumber,
    /// Owner's email (optional)
    Email,
    /// Owner's postal address
    Address,
    /// Device IMEI
    Imei,
    /// Device brand
    Brand,
    /// Device model number
    Model,
    /// Device colour
    Color,
    /// Last phone number used in the device
    DevicePhone,
    /// Date of the incident
    Date,
    /// Time of the incident
    Time,
    /// Kind of incident
    #[serde(rename = "type")]
    IncidentType,
    /// Last seen location
    Location,
    /// Name of the uploaded owner ID document
    OwnerId,
    /// Payment transaction reference
    TransactionRef,
    /// Acceptance of terms
    Terms,
}

impl ReportField {
    /// Form field name, as used in the serialized draft
    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
            Self::Address => "address",
            Self::Imei => "imei",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Color => "color",
            Self::DevicePhone => "devicePhone",
            Self::Date => "date",
            Self::Time => "time",
            Self::IncidentType => "type",
            Self::Location => "location",
            Self::OwnerId => "ownerId",
            Self::TransactionRef => "transactionRef",
            Self::Terms => "terms",
        }
    }

    /// Label shown next to the input
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::PhoneNumber => "Phone Number",
            Self::Email => "Email Address (Optional)",
            Self::Address => "Address",
            Self::Imei => "IMEI Number",
            Self::Brand => "Device Brand",
            Self::Model => "Device Model Number",
            Self::Color => "Device Color",
            Self::DevicePhone => "Device Phone Number (Last Used)",
            Self::Date => "Date of Incident",
            Self::Time => "Time of Incident",
            Self::IncidentType => "Type of Incident",
            Self::Location => "Last Seen Location / Address",
            Self::OwnerId => "Owner's Passport / ID",
            Self::TransactionRef => "Transaction Reference",
            Self::Terms => "Acceptance of Terms",
        }
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ReportField {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        WizardStep::ALL
            .into_iter()
            .flat_map(|step| step.fields().iter().copied())
            .find(|field| field.key() == s)
            .ok_or_else(|| TypesError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// The five steps of the report wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum WizardStep {
    /// Step 1: owner details
    #[default]
    Personal = 1,
    /// Step 2: device details
    Device = 2,
    /// Step 3: incident details
    Incident = 3,
    /// Step 4: proof of ownership
    Ownership = 4,
    /// Step 5: review and payment reference
    Confirmation = 5,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [Self; 5] = [
        Self::Personal,
        Self::Device,
        Self::Incident,
        Self::Ownership,
        Self::Confirmation,
    ];

    /// Number of steps in the wizard
    pub const COUNT: u8 = 5;

    /// One-based step number
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Following step, saturating at the last one
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Personal => Self::Device,
            Self::Device => Self::Incident,
            Self::Incident => Self::Ownership,
            Self::Ownership | Self::Confirmation => Self::Confirmation,
        }
    }

    /// Preceding step, saturating at the first one
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Personal | Self::Device => Self::Personal,
            Self::Incident => Self::Device,
            Self::Ownership => Self::Incident,
            Self::Confirmation => Self::Ownership,
        }
    }

    /// Fields rendered on this step
    pub const fn fields(self) -> &'static [ReportField] {
        match self {
            Self::Personal => &[
                ReportField::FullName,
                ReportField::PhoneNumber,
                ReportField::Email,
                ReportField::Address,
            ],
            Self::Device => &[
                ReportField::Imei,
                ReportField::Brand,
                ReportField::Model,
                ReportField::Color,
                ReportField::DevicePhone,
            ],
            Self::Incident => &[
                ReportField::Date,
                ReportField::Time,
                ReportField::IncidentType,
                ReportField::Location,
            ],
            Self::Ownership => &[ReportField::OwnerId],
            Self::Confirmation => &[ReportField::TransactionRef, ReportField::Terms],
        }
    }

    /// Fields that must be non-empty before leaving this step
    pub const fn required(self) -> &'static [ReportField] {
        match self {
            Self::Personal => &[ReportField::FullName, ReportField::PhoneNumber],
            Self::Device => &[ReportField::Imei, ReportField::Brand, ReportField::Model],
            Self::Incident => &[
                ReportField::Date,
                ReportField::Time,
                ReportField::IncidentType,
            ],
            Self::Ownership => &[],
            Self::Confirmation => &[ReportField::TransactionRef, ReportField::Terms],
        }
    }

    /// Heading shown above the step
    pub const fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Device => "Device Information",
            Self::Incident => "Incident Information",
            Self::Ownership => "Proof of Ownership",
            Self::Confirmation => "Details Confirmation",
        }
    }

    /// Width of the progress bar, in percent
    pub const fn progress_percent(self) -> u8 {
        self.number() * (100 / Self::COUNT)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.number(), Self::COUNT)
    }
}

/// Field values accumulated across wizard steps
///
/// A field counts as present when its value is non-empty. Whitespace is kept
/// as entered; the wizard performs presence checks only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportDraft {
    values: BTreeMap<ReportField, String>,
}

impl ReportDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value, if any was ever entered
    pub fn get(&self, field: ReportField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Stored value or the empty string
    pub fn value(&self, field: ReportField) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// Set a single field, replacing any earlier value
    pub fn set(&mut self, field: ReportField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Merge a batch of values; later values win
    pub fn merge<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (ReportField, String)>,
    {
        self.values.extend(values);
    }

    /// Whether the field holds a non-empty value
    pub fn is_present(&self, field: ReportField) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    /// First field of `fields` that is missing or empty
    pub fn first_missing(&self, fields: &[ReportField]) -> Option<ReportField> {
        fields.iter().copied().find(|f| !self.is_present(*f))
    }

    /// Whether no field has been entered
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored fields in field order
    pub fn iter(&self) -> impl Iterator<Item = (ReportField, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(ReportField, String)> for ReportDraft {
    fn from_iter<T: IntoIterator<Item = (ReportField, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Status of a report in the station listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Device is flagged as stolen
    Stolen,
    /// Device has been recovered and is no longer flagged
    Recovered,
}

impl ReportStatus {
    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stolen => "Stolen",
            Self::Recovered => "Recovered",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A filed report as shown in the station listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report identifier, e.g. `RPT001`
    pub id: String,
    /// 15-digit device IMEI
    pub imei: String,
    /// Device brand
    pub brand: String,
    /// Device model
    pub model: String,
    /// Date the report was filed
    pub date_reported: NaiveDate,
    /// Current status
    pub status: ReportStatus,
}

impl Report {
    /// Brand and model joined for display
    pub fn device(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// A completed draft handed to the registry for filing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSubmission {
    /// Every field collected by the wizard
    pub fields: ReportDraft,
}

impl ReportSubmission {
    /// IMEI of the reported device
    pub fn imei(&self) -> &str {
        self.fields.value(ReportField::Imei)
    }

    /// Payment transaction reference
    pub fn transaction_ref(&self) -> &str {
        self.fields.value(ReportField::TransactionRef)
    }
}

/// Acknowledgement returned once a report has been filed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Assigned report identifier
    pub id: String,
    /// Initial status of the report
    pub status: ReportStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_step_numbers() {
        for (i, step) in WizardStep::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(step.number()), i + 1);
        }
    }

    #[test]
    fn test_required_fields_are_rendered_on_their_step() {
        for step in WizardStep::ALL {
            for field in step.required() {
                assert!(step.fields().contains(field), "{field} not on {step}");
            }
        }
    }

    #[test]
    fn test_field_keys_parse() {
        for step in WizardStep::ALL {
            for field in step.fields() {
                assert_eq!(field.key().parse::<ReportField>(), Ok(*field));
            }
        }
        assert_eq!(
            "type".parse::<ReportField>(),
            Ok(ReportField::IncidentType)
        );
        assert!("nickname".parse::<ReportField>().is_err());
    }

    #[test]
    fn test_progress() {
        assert_eq!(WizardStep::Personal.progress_percent(), 20);
        assert_eq!(WizardStep::Confirmation.progress_percent(), 100);
        assert_eq!(WizardStep::Incident.to_string(), "Step 3 of 5");
    }

    #[test]
    fn test_draft_presence() {
        let mut draft = ReportDraft::new();
        draft.set(ReportField::FullName, "");
        draft.set(ReportField::PhoneNumber, "0803");

        assert!(!draft.is_present(ReportField::FullName));
        assert!(draft.is_present(ReportField::PhoneNumber));
        assert!(!draft.is_present(ReportField::Email));
        assert_eq!(
            draft.first_missing(WizardStep::Personal.required()),
            Some(ReportField::FullName)
        );
    }

    #[test]
    fn test_draft_merge_overwrites() {
        let mut draft: ReportDraft = [(ReportField::Brand, "Nokia".to_string())]
            .into_iter()
            .collect();
        draft.merge([
            (ReportField::Brand, "Tecno".to_string()),
            (ReportField::Model, "Camon 20".to_string()),
        ]);

        assert_eq!(draft.value(ReportField::Brand), "Tecno");
        assert_eq!(draft.value(ReportField::Model), "Camon 20");
        assert_eq!(draft.iter().count(), 2);
    }

    #[test]
    fn test_draft_serializes_with_form_keys() {
        let draft: ReportDraft = [
            (ReportField::IncidentType, "Burglary".to_string()),
            (ReportField::FullName, "Ada".to_string()),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"fullName":"Ada","type":"Burglary"}"#);
    }

    proptest! {
        #[test]
        fn test_next_and_prev_stay_in_range(n in 1u8..=5, moves in proptest::collection::vec(any::<bool>(), 0..20)) {
            let mut step = WizardStep::ALL[usize::from(n - 1)];
            for forward in moves {
                step = if forward { step.next() } else { step.prev() };
                prop_assert!((1..=5).contains(&step.number()));
            }
        }
    }
}
