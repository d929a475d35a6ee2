//! Station report listing

use crate::{
    components::{PortalLayout, Spinner},
    state::use_app_context,
};
use leptos::{prelude::*, task::spawn_local};
use safeimei_protocol::{RequestState, filter_reports};
use safeimei_types::{PageId, Report, ReportStatus};

/// Searchable table of the station's reports
///
/// The list is fetched once on mount; typing narrows it locally. A failure the
/// registry reports as retryable gets a "Try again" button.
#[component]
pub fn ViewReportsPage() -> impl IntoView {
    let app = use_app_context();
    let term = RwSignal::new(String::new());
    let listing = RwSignal::new(RequestState::<Vec<Report>>::default());
    let retryable = RwSignal::new(false);

    let load = move || {
        if !listing.try_update(RequestState::try_begin).unwrap_or(false) {
            return;
        }
        let registry = app.registry();
        spawn_local(async move {
            let outcome = registry.list_station_reports("").await;
            if let Err(e) = &outcome {
                tracing::warn!(error = %e, retryable = e.is_retryable(), "report listing failed");
            }
            retryable.try_set(matches!(&outcome, Err(e) if e.is_retryable()));
            listing.try_update(|state| state.settle(outcome.map_err(|e| e.user_message())));
        });
    };
    load();

    let visible = Memo::new(move |_| {
        listing.with(|state| {
            state.ready().map(|reports| {
                term.with(|t| filter_reports(reports, t).into_iter().cloned().collect::<Vec<_>>())
            })
        })
    });

    view! {
        <PortalLayout>
            <div class="mb-5">
                <button
                    on:click=move |_| app.navigate(PageId::Dashboard)
                    class="inline-flex items-center text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors"
                >
                    "← Back to Dashboard"
                </button>
            </div>
            <div class="sm:flex sm:items-center sm:justify-between">
                <h1 class="text-2xl font-semibold text-gray-900">"Station Reports"</h1>
                <div class="mt-4 sm:mt-0 sm:ml-16 sm:flex-none">
                    <input
                        type="search"
                        id="report-search"
                        placeholder="Search by IMEI, brand or model..."
                        class="w-full sm:w-auto px-3 py-2 border border-gray-300 rounded-md shadow-sm"
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="mt-8 overflow-x-auto shadow ring-1 ring-black ring-opacity-5 md:rounded-lg">
                <table class="min-w-full divide-y divide-gray-300">
                    <thead class="bg-gray-50">
                        <tr>
                            <th scope="col" class="py-3.5 pl-4 pr-3 text-left text-sm font-semibold text-gray-900 sm:pl-6">"IMEI"</th>
                            <th scope="col" class="px-3 py-3.5 text-left text-sm font-semibold text-gray-900">"Device"</th>
                            <th scope="col" class="px-3 py-3.5 text-left text-sm font-semibold text-gray-900">"Date Reported"</th>
                            <th scope="col" class="px-3 py-3.5 text-left text-sm font-semibold text-gray-900">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 bg-white">
                        {move || match visible.get() {
                            Some(rows) if rows.is_empty() => message_row("No reports found.").into_any(),
                            Some(rows) => rows
                                .into_iter()
                                .map(|report| view! { <ReportRow report=report /> })
                                .collect_view()
                                .into_any(),
                            None => listing.with(|state| match state.error() {
                                Some(message) => view! {
                                    <tr>
                                        <td colspan="4" class="text-center text-gray-500 py-10">
                                            <p>{message.to_string()}</p>
                                            <Show when=move || retryable.get()>
                                                <button
                                                    type="button"
                                                    on:click=move |_| load()
                                                    class="mt-3 inline-flex items-center px-4 py-2 border border-gray-300 rounded-md text-sm bg-white hover:bg-gray-50"
                                                >
                                                    "Try again"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                                None => view! {
                                    <tr>
                                        <td colspan="4" class="text-center text-gray-500 py-10">
                                            <Spinner />
                                            "Loading reports..."
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                            }),
                        }}
                    </tbody>
                </table>
            </div>
        </PortalLayout>
    }
}

fn message_row(text: impl Into<String>) -> impl IntoView {
    let text = text.into();
    view! {
        <tr>
            <td colspan="4" class="text-center text-gray-500 py-10">{text}</td>
        </tr>
    }
}

#[component]
fn ReportRow(report: Report) -> impl IntoView {
    let badge = match report.status {
        ReportStatus::Stolen => "inline-flex rounded-full px-2 text-xs font-semibold leading-5 bg-red-100 text-red-800",
        ReportStatus::Recovered => "inline-flex rounded-full px-2 text-xs font-semibold leading-5 bg-green-100 text-green-800",
    };

    view! {
        <tr>
            <td class="whitespace-nowrap py-4 pl-4 pr-3 text-sm font-medium text-gray-900 sm:pl-6">{report.imei.clone()}</td>
            <td class="whitespace-nowrap px-3 py-4 text-sm text-gray-500">{report.device()}</td>
            <td class="whitespace-nowrap px-3 py-4 text-sm text-gray-500">{report.date_reported.to_string()}</td>
            <td class="whitespace-nowrap px-3 py-4 text-sm text-gray-500">
                <span class=badge>{report.status.label()}</span>
            </td>
        </tr>
    }
}
