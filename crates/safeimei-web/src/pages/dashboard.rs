//! Officer dashboard

use crate::{components::PortalLayout, state::use_app_context};
use leptos::prelude::*;
use safeimei_types::PageId;

const STATS: [(&str, u32); 3] = [
    ("Reports This Month", 12),
    ("Pending Admin Review", 3),
    ("Recently Recovered", 1),
];

/// Station figures and the two portal actions
#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app_context();

    view! {
        <PortalLayout>
            <h1 class="text-2xl font-semibold text-gray-900 mb-6">"Officer Dashboard"</h1>
            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-3 mb-8">
                {STATS
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="bg-white overflow-hidden shadow rounded-lg">
                            <div class="p-5">
                                <dl>
                                    <dt class="text-sm font-medium text-gray-500 truncate">{label}</dt>
                                    <dd class="mt-1 text-3xl font-semibold text-gray-900">{value}</dd>
                                </dl>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="mt-8 grid grid-cols-1 gap-6 sm:grid-cols-2">
                <button
                    on:click=move |_| app.navigate(PageId::CreateReport)
                    class="p-8 bg-white rounded-lg shadow-md hover:shadow-xl transition-shadow text-center"
                >
                    <h2 class="text-xl font-bold text-gray-800">"Create New Report"</h2>
                    <p class="text-gray-500 mt-2">"File a new report for a stolen device."</p>
                </button>
                <button
                    on:click=move |_| app.navigate(PageId::ViewReports)
                    class="p-8 bg-white rounded-lg shadow-md hover:shadow-xl transition-shadow text-center"
                >
                    <h2 class="text-xl font-bold text-gray-800">"View Station Reports"</h2>
                    <p class="text-gray-500 mt-2">"Review and manage reports filed by your station."</p>
                </button>
            </div>
        </PortalLayout>
    }
}
