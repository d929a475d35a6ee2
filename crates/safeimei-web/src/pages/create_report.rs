//! Five-step report wizard

use crate::{
    components::{FieldError, PortalLayout, Spinner, WizardInput, WizardSelect, WizardTextArea},
    state::use_app_context,
};
use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use safeimei_protocol::{DEVICE_BRANDS, DEVICE_COLORS, INCIDENT_TYPES, ReportWizard, RequestState};
use safeimei_types::{ReportDraft, ReportField, SubmissionReceipt, WizardStep};

/// Report wizard; the draft lives only as long as this page is mounted
#[component]
pub fn CreateReportPage() -> impl IntoView {
    let app = use_app_context();
    let wizard = RwSignal::new(ReportWizard::new());
    let submission = RwSignal::new(RequestState::<SubmissionReceipt>::default());
    let step = Memo::new(move |_| wizard.with(ReportWizard::step));
    let pending = Memo::new(move |_| submission.with(RequestState::is_pending));

    let on_next = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = wizard.try_update(|w| w.next(std::iter::empty()));
        tracing::debug!(?outcome, "wizard step submitted");
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(report)) = wizard.try_update(|w| w.prepare_submission(std::iter::empty()))
        else {
            return;
        };
        if !submission.try_update(RequestState::try_begin).unwrap_or(false) {
            return;
        }

        let registry = app.registry();
        spawn_local(async move {
            let outcome = registry.submit_report(&report).await;
            match &outcome {
                Ok(receipt) => {
                    tracing::info!(report_id = %receipt.id, "report submitted");
                    wizard.try_update(|w| w.complete_submission(&app));
                }
                Err(e) => tracing::warn!(error = %e, "report submission failed"),
            }
            submission.try_update(|state| state.settle(outcome.map_err(|e| e.user_message())));
        });
    };

    let owner_file = NodeRef::<html::Input>::new();
    let on_file = move |_| {
        let name = owner_file
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        if let Some(name) = name {
            wizard.update(|w| w.update_field(ReportField::OwnerId, name));
        }
    };

    view! {
        <PortalLayout>
            <h1 class="text-2xl font-semibold text-gray-900 mb-2">"Create New Report"</h1>
            <h2 class="text-lg text-gray-600 mb-6">{move || step.get().title()}</h2>
            <div class="bg-white p-8 rounded-lg shadow-lg">
                <div class="mb-8">
                    <div class="flex justify-between mb-1">
                        <span class="text-base font-medium text-blue-700">{move || step.get().to_string()}</span>
                    </div>
                    <div class="w-full bg-gray-200 rounded-full h-2.5">
                        <div
                            class="bg-blue-600 h-2.5 rounded-full"
                            style:width=move || format!("{}%", step.get().progress_percent())
                        ></div>
                    </div>
                </div>
                {move || match step.get() {
                    WizardStep::Personal => view! {
                        <form on:submit=on_next class="space-y-4" novalidate>
                            <WizardInput wizard=wizard field=ReportField::FullName />
                            <WizardInput wizard=wizard field=ReportField::PhoneNumber input_type="tel" />
                            <WizardInput wizard=wizard field=ReportField::Email input_type="email" />
                            <WizardTextArea wizard=wizard field=ReportField::Address />
                            <StepButtons wizard=wizard show_back=false />
                        </form>
                    }
                    .into_any(),
                    WizardStep::Device => view! {
                        <form on:submit=on_next class="space-y-4" novalidate>
                            <WizardInput wizard=wizard field=ReportField::Imei max_length=15 />
                            <WizardSelect
                                wizard=wizard
                                field=ReportField::Brand
                                placeholder="Select Brand..."
                                options=DEVICE_BRANDS
                            />
                            <WizardInput wizard=wizard field=ReportField::Model />
                            <WizardSelect
                                wizard=wizard
                                field=ReportField::Color
                                placeholder="Select Color..."
                                options=DEVICE_COLORS
                            />
                            <WizardInput wizard=wizard field=ReportField::DevicePhone input_type="tel" />
                            <StepButtons wizard=wizard />
                        </form>
                    }
                    .into_any(),
                    WizardStep::Incident => view! {
                        <form on:submit=on_next class="space-y-4" novalidate>
                            <WizardInput wizard=wizard field=ReportField::Date input_type="date" />
                            <WizardInput wizard=wizard field=ReportField::Time input_type="time" />
                            <WizardSelect
                                wizard=wizard
                                field=ReportField::IncidentType
                                placeholder="Select Type..."
                                options=INCIDENT_TYPES
                            />
                            <WizardTextArea wizard=wizard field=ReportField::Location />
                            <StepButtons wizard=wizard />
                        </form>
                    }
                    .into_any(),
                    WizardStep::Ownership => view! {
                        <form on:submit=on_next class="space-y-4" novalidate>
                            <div>
                                <span class="block text-sm font-medium text-gray-700">
                                    {ReportField::OwnerId.label()}
                                </span>
                                <div class="mt-1 flex justify-center px-6 pt-5 pb-6 border-2 border-gray-300 border-dashed rounded-md">
                                    <div class="space-y-1 text-center">
                                        <label
                                            for="ownerId"
                                            class="relative cursor-pointer bg-white rounded-md font-medium text-blue-600 hover:text-blue-500"
                                        >
                                            <span>"Upload a file"</span>
                                            <input
                                                id="ownerId"
                                                name="ownerId"
                                                type="file"
                                                class="sr-only"
                                                node_ref=owner_file
                                                on:change=on_file
                                            />
                                        </label>
                                        <p class="text-xs text-gray-500">"PNG, JPG up to 10MB"</p>
                                        <p class="text-sm text-gray-700">
                                            {move || wizard.with(|w| {
                                                w.draft().get(ReportField::OwnerId).map(|name| format!("Selected: {name}"))
                                            })}
                                        </p>
                                    </div>
                                </div>
                            </div>
                            <StepButtons wizard=wizard />
                        </form>
                    }
                    .into_any(),
                    WizardStep::Confirmation => view! {
                        <div class="bg-white shadow overflow-hidden sm:rounded-lg">
                            <div class="px-4 py-5">
                                <h3 class="text-lg font-medium text-gray-900">"Confirm Report Details"</h3>
                            </div>
                            <div class="border-t border-gray-200">
                                <dl class="divide-y divide-gray-200">
                                    {move || {
                                        wizard.with(|w| confirmation_summary(w.draft()))
                                            .into_iter()
                                            .map(|(label, value)| view! {
                                                <div class="py-4 sm:grid sm:grid-cols-3 sm:gap-4 sm:px-6">
                                                    <dt class="text-sm font-medium text-gray-500">{label}</dt>
                                                    <dd class="mt-1 text-sm text-gray-900 sm:mt-0 sm:col-span-2">{value}</dd>
                                                </div>
                                            })
                                            .collect_view()
                                    }}
                                </dl>
                            </div>
                        </div>
                        <form on:submit=on_submit class="mt-6 space-y-4" novalidate>
                            <WizardInput
                                wizard=wizard
                                field=ReportField::TransactionRef
                                placeholder="Enter payment reference"
                            />
                            <div>
                                <div class="flex items-start">
                                    <div class="flex items-center h-5">
                                        <input
                                            id="terms"
                                            type="checkbox"
                                            class="h-4 w-4 text-blue-600 border-gray-300 rounded"
                                            prop:checked=move || wizard.with(|w| w.draft().is_present(ReportField::Terms))
                                            on:change=move |ev| {
                                                let accepted = if event_target_checked(&ev) { "true" } else { "" };
                                                wizard.update(|w| w.update_field(ReportField::Terms, accepted));
                                            }
                                        />
                                    </div>
                                    <div class="ml-3 text-sm">
                                        <label for="terms" class="font-medium text-gray-700">
                                            {ReportField::Terms.label()}
                                        </label>
                                        <p class="text-gray-500">
                                            "You confirm the details are accurate and agree to the Terms & Conditions."
                                        </p>
                                    </div>
                                </div>
                                <FieldError wizard=wizard field=ReportField::Terms />
                            </div>
                            <p class="text-sm text-red-600" role="alert">
                                {move || submission.with(|s| s.error().map(str::to_string))}
                            </p>
                            <StepButtons wizard=wizard label="Submit Report" busy=pending />
                        </form>
                    }
                    .into_any(),
                }}
            </div>
        </PortalLayout>
    }
}

/// Back and forward buttons shared by every step
#[component]
fn StepButtons(
    wizard: RwSignal<ReportWizard>,
    #[prop(default = true)] show_back: bool,
    #[prop(default = "Next")] label: &'static str,
    #[prop(optional)] busy: Option<Memo<bool>>,
) -> impl IntoView {
    let busy = move || busy.is_some_and(|b| b.get());
    let is_final = label != "Next";
    let forward_class = if is_final {
        "w-full justify-center py-2 px-4 border rounded-md text-sm text-white bg-green-600 hover:bg-green-700 disabled:opacity-75"
    } else {
        "w-full justify-center py-2 px-4 border rounded-md text-sm text-white bg-blue-600 hover:bg-blue-700"
    };

    view! {
        <div class="flex gap-4 mt-6">
            <Show when=move || show_back>
                <button
                    type="button"
                    disabled=busy
                    on:click=move |_| wizard.update(ReportWizard::prev)
                    class="w-full justify-center py-2 px-4 border border-gray-300 rounded-md text-sm bg-white hover:bg-gray-50"
                >
                    "Back"
                </button>
            </Show>
            <button type="submit" disabled=busy class=forward_class>
                <Show when=busy fallback=move || label>
                    <Spinner />
                    "Submitting..."
                </Show>
            </button>
        </div>
    }
}

/// Rows of the confirmation list; blanks read "Not provided"
fn confirmation_summary(draft: &ReportDraft) -> Vec<(&'static str, String)> {
    let or_missing = |value: &str| {
        let value = value.trim();
        if value.is_empty() {
            "Not provided".to_string()
        } else {
            value.to_string()
        }
    };
    let device = format!(
        "{} {}",
        draft.value(ReportField::Brand),
        draft.value(ReportField::Model)
    );

    vec![
        ("Full Name", or_missing(draft.value(ReportField::FullName))),
        ("Phone Number", or_missing(draft.value(ReportField::PhoneNumber))),
        ("IMEI", or_missing(draft.value(ReportField::Imei))),
        ("Device", or_missing(&device)),
        ("Date of Incident", or_missing(draft.value(ReportField::Date))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_marks_blanks() {
        let mut draft = ReportDraft::new();
        draft.set(ReportField::FullName, "Ada Obi");
        draft.set(ReportField::Model, "Galaxy S22");

        let summary = confirmation_summary(&draft);

        assert_eq!(
            summary,
            vec![
                ("Full Name", "Ada Obi".to_string()),
                ("Phone Number", "Not provided".to_string()),
                ("IMEI", "Not provided".to_string()),
                ("Device", "Galaxy S22".to_string()),
                ("Date of Incident", "Not provided".to_string()),
            ]
        );
    }

    #[test]
    fn test_summary_joins_brand_and_model() {
        let mut draft = ReportDraft::new();
        draft.set(ReportField::Brand, "Tecno");
        draft.set(ReportField::Model, "Camon 20");

        let device = confirmation_summary(&draft)
            .into_iter()
            .find(|(label, _)| *label == "Device")
            .map(|(_, value)| value);
        assert_eq!(device.as_deref(), Some("Tecno Camon 20"));
    }
}
