//! Frequently asked questions

use crate::components::SimplePage;
use leptos::prelude::*;
use safeimei_protocol::{FAQ_ENTRIES, FaqAccordion};

/// Accordion of questions; opening one closes the other
#[component]
pub fn FaqPage() -> impl IntoView {
    let accordion = RwSignal::new(FaqAccordion::default());

    view! {
        <SimplePage title="Frequently Asked Questions">
            <div class="space-y-4">
                {FAQ_ENTRIES
                    .iter()
                    .enumerate()
                    .map(move |(index, entry)| {
                        let open = move || accordion.get().is_open(index);
                        view! {
                            <div>
                                <button
                                    on:click=move |_| accordion.update(|a| *a = a.toggle(index))
                                    class="w-full flex justify-between items-center text-left p-4 bg-white border rounded-lg shadow-sm hover:bg-gray-50 focus:outline-none"
                                    aria-expanded=move || open().to_string()
                                >
                                    <span class="font-medium text-gray-900">{entry.question}</span>
                                    <span class="text-gray-500">{move || if open() { "−" } else { "+" }}</span>
                                </button>
                                <Show when=open>
                                    <div class="px-4 pt-2 pb-4 text-gray-600">{entry.answer}</div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SimplePage>
    }
}
