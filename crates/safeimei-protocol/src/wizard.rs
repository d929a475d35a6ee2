//! The five-step report wizard
//!
//! The wizard owns the draft for as long as the page is mounted. Each step
//! merges the submitted form values into the draft, then checks that the
//! step's required fields are non-empty. Nothing beyond presence is checked:
//! no IMEI checksum, no date range, no file type or size.

use crate::notification::{NotificationSink, REPORT_SUBMITTED_MESSAGE, REPORT_SUBMITTED_TITLE};
use safeimei_types::{ReportDraft, ReportField, ReportSubmission, StepValidationError, WizardStep};

/// Brands offered on the device step
pub const DEVICE_BRANDS: &[&str] = &[
    "Samsung", "Apple", "Tecno", "Infinix", "Xiaomi", "Nokia", "itel", "Oppo", "Vivo", "Realme",
    "Gionee", "Huawei", "Other",
];

/// Colours offered on the device step
pub const DEVICE_COLORS: &[&str] = &[
    "Black",
    "White",
    "Blue",
    "Gold",
    "Silver",
    "Red",
    "Green",
    "Gray",
    "Purple",
    "Rose Gold",
    "Other",
];

/// Incident kinds offered on the incident step
pub const INCIDENT_TYPES: &[&str] = &[
    "Snatching (in transit)",
    "Armed Robbery",
    "Burglary (house/office)",
    "Misplaced / Lost",
    "Pickpocketing",
    "Other",
];

/// Result of asking the wizard to leave the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step was complete; the wizard is now on the contained step
    Advanced(WizardStep),
    /// A required field was empty; the wizard stayed put
    Rejected(ReportField),
}

/// Step position, accumulated draft and the active validation error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportWizard {
    step: WizardStep,
    draft: ReportDraft,
    error: Option<StepValidationError>,
}

impl ReportWizard {
    /// A fresh wizard on step 1 with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Values collected so far
    pub const fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    /// The active validation error, if any
    pub const fn error(&self) -> Option<&StepValidationError> {
        self.error.as_ref()
    }

    /// Field the active error's message is rendered under
    ///
    /// Data-entry steps show one combined message under their first required
    /// input, whichever field is missing; the confirmation step shows it
    /// under the missing field itself.
    pub fn error_anchor(&self) -> Option<ReportField> {
        self.error.as_ref().map(|e| display_anchor(e.field))
    }

    /// Message to render under `field`, if the active error is shown there
    pub fn error_for(&self, field: ReportField) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| display_anchor(e.field) == field)
            .map(|e| e.message.as_str())
    }

    /// Record a single edit without validating
    pub fn update_field(&mut self, field: ReportField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Merge `values` and advance if the current step is complete
    ///
    /// On the last step a complete form keeps the wizard where it is; filing
    /// goes through [`Self::prepare_submission`].
    pub fn next<I>(&mut self, values: I) -> StepOutcome
    where
        I: IntoIterator<Item = (ReportField, String)>,
    {
        self.draft.merge(values);

        if let Some(missing) = self.draft.first_missing(self.step.required()) {
            let error = self.reject(self.step, missing);
            return StepOutcome::Rejected(error.field);
        }

        self.step = self.step.next();
        self.error = None;
        StepOutcome::Advanced(self.step)
    }

    /// Go back one step, keeping everything entered so far
    pub fn prev(&mut self) {
        self.step = self.step.prev();
        self.error = None;
    }

    /// Validate the confirmation fields and build the submission
    ///
    /// The draft is left intact so a failed filing can be retried; call
    /// [`Self::complete_submission`] once the registry has accepted it.
    ///
    /// # Errors
    ///
    /// Returns the validation error (also stored as the active error) when
    /// the transaction reference or terms acceptance is missing.
    pub fn prepare_submission<I>(&mut self, values: I) -> Result<ReportSubmission, StepValidationError>
    where
        I: IntoIterator<Item = (ReportField, String)>,
    {
        self.draft.merge(values);

        if let Some(missing) = self
            .draft
            .first_missing(WizardStep::Confirmation.required())
        {
            return Err(self.reject(WizardStep::Confirmation, missing));
        }

        self.error = None;
        Ok(ReportSubmission {
            fields: self.draft.clone(),
        })
    }

    /// Announce success and start over on step 1 with an empty draft
    pub fn complete_submission(&mut self, sink: &dyn NotificationSink) {
        sink.notify(REPORT_SUBMITTED_TITLE, REPORT_SUBMITTED_MESSAGE);
        self.reset();
    }

    /// Validate, announce and reset in one go
    ///
    /// # Errors
    ///
    /// Same as [`Self::prepare_submission`]; on error nothing is announced
    /// and the wizard stays on the current step.
    pub fn submit<I>(
        &mut self,
        values: I,
        sink: &dyn NotificationSink,
    ) -> Result<ReportSubmission, StepValidationError>
    where
        I: IntoIterator<Item = (ReportField, String)>,
    {
        let submission = self.prepare_submission(values)?;
        self.complete_submission(sink);
        Ok(submission)
    }

    /// Discard the draft and return to step 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn reject(&mut self, step: WizardStep, missing: ReportField) -> StepValidationError {
        let error = StepValidationError::new(missing, validation_message(step, missing));
        self.error = Some(error.clone());
        error
    }
}

fn display_anchor(missing: ReportField) -> ReportField {
    let owner = WizardStep::ALL
        .into_iter()
        .find(|step| step.required().contains(&missing));
    match owner {
        Some(WizardStep::Confirmation) | None => missing,
        Some(step) => step.required().first().copied().unwrap_or(missing),
    }
}

fn validation_message(step: WizardStep, field: ReportField) -> &'static str {
    match (step, field) {
        (WizardStep::Personal, _) => "Full name and phone number are required.",
        (WizardStep::Device, _) => "IMEI, brand, and model are required.",
        (WizardStep::Incident, _) => "Date, time, and type of incident are required.",
        (_, ReportField::Terms) => "You must accept the terms and conditions.",
        (_, ReportField::TransactionRef) => "Transaction Reference is required.",
        _ => "This field is required.",
    }
}
