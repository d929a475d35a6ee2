//! Inputs bound to the report wizard
//!
//! Each input reads its value from the wizard draft and writes every edit
//! back with `update_field`, so values survive moving between steps.

use leptos::prelude::*;
use safeimei_protocol::ReportWizard;
use safeimei_types::ReportField;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm";

/// Inline message under a field, shown while the wizard's error targets it
#[component]
pub fn FieldError(wizard: RwSignal<ReportWizard>, field: ReportField) -> impl IntoView {
    let message = Memo::new(move |_| wizard.with(|w| w.error_for(field).map(str::to_string)));

    view! {
        {move || {
            message
                .get()
                .map(|text| view! { <p class="text-xs text-red-600 mt-1">{text}</p> })
        }}
    }
}

/// Single-line input
#[component]
pub fn WizardInput(
    wizard: RwSignal<ReportWizard>,
    field: ReportField,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] max_length: Option<u32>,
) -> impl IntoView {
    let key = field.key();

    view! {
        <div>
            <label for=key class="block text-sm font-medium text-gray-700">{field.label()}</label>
            <div class="mt-1">
                <input
                    id=key
                    name=key
                    type=input_type
                    placeholder=placeholder
                    maxlength=max_length.map(|n| n.to_string())
                    class=INPUT_CLASS
                    prop:value=move || wizard.with(|w| w.draft().value(field).to_string())
                    on:input=move |ev| wizard.update(|w| w.update_field(field, event_target_value(&ev)))
                />
            </div>
            <FieldError wizard=wizard field=field />
        </div>
    }
}

/// Drop-down whose first entry is a placeholder submitting the empty string
#[component]
pub fn WizardSelect(
    wizard: RwSignal<ReportWizard>,
    field: ReportField,
    placeholder: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    let key = field.key();

    view! {
        <div>
            <label for=key class="block text-sm font-medium text-gray-700">{field.label()}</label>
            <div class="mt-1">
                <select
                    id=key
                    name=key
                    class=format!("{INPUT_CLASS} bg-white")
                    prop:value=move || wizard.with(|w| w.draft().value(field).to_string())
                    on:change=move |ev| wizard.update(|w| w.update_field(field, event_target_value(&ev)))
                >
                    <option value="">{placeholder}</option>
                    {options
                        .iter()
                        .map(|option| view! { <option value=*option>{*option}</option> })
                        .collect_view()}
                </select>
            </div>
            <FieldError wizard=wizard field=field />
        </div>
    }
}

/// Multi-line input
#[component]
pub fn WizardTextArea(wizard: RwSignal<ReportWizard>, field: ReportField) -> impl IntoView {
    let key = field.key();

    view! {
        <div>
            <label for=key class="block text-sm font-medium text-gray-700">{field.label()}</label>
            <textarea
                id=key
                name=key
                rows="3"
                class=format!("mt-1 {INPUT_CLASS}")
                prop:value=move || wizard.with(|w| w.draft().value(field).to_string())
                on:input=move |ev| wizard.update(|w| w.update_field(field, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}
