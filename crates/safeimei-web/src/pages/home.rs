//! Landing page with the public IMEI lookup

use crate::{components::Spinner, state::use_app_context};
use leptos::{prelude::*, task::spawn_local};
use safeimei_protocol::RequestState;
use safeimei_types::{LookupResult, LookupStatus};

const STEPS: [(&str, &str, &str); 3] = [
    (
        "1.",
        "Report a Theft",
        "Victims report their stolen device at an authorized police station.",
    ),
    (
        "2.",
        "We Verify & Log",
        "Police verify the report and add the IMEI to our secure national database.",
    ),
    (
        "3.",
        "You Check Before Buying",
        "Enter the phone's IMEI on our site to see its status instantly.",
    ),
];

/// Hero, lookup form and the "How It Works" section
#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app_context();
    let imei = RwSignal::new(String::new());
    let lookup = RwSignal::new(RequestState::<LookupResult>::default());
    let pending = Memo::new(move |_| lookup.with(RequestState::is_pending));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !lookup.try_update(RequestState::try_begin).unwrap_or(false) {
            return;
        }

        let registry = app.registry();
        let value = imei.get_untracked();
        spawn_local(async move {
            let outcome = registry.lookup_imei(&value).await;
            lookup.try_update(|state| state.settle(outcome.map_err(|e| e.user_message())));
        });
    };

    view! {
        <div>
            <header class="bg-white">
                <div class="max-w-7xl mx-auto py-20 px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl md:text-6xl">
                        "Buy Used Phones with Confidence."
                    </h1>
                    <p class="mt-4 max-w-2xl mx-auto text-xl text-gray-500">
                        "Instantly check if a phone has been reported stolen with Nigeria's official IMEI database."
                    </p>
                    <div class="mt-10 max-w-xl mx-auto">
                        <form on:submit=on_submit class="sm:flex sm:gap-2">
                            <input
                                id="imei-input"
                                type="text"
                                maxlength="15"
                                inputmode="numeric"
                                placeholder="Enter 15-digit IMEI number"
                                class="w-full px-5 py-4 border border-gray-300 rounded-md shadow-sm focus:ring-blue-500 focus:border-blue-500 text-lg"
                                prop:value=move || imei.get()
                                on:input=move |ev| imei.set(event_target_value(&ev))
                            />
                            <button
                                type="submit"
                                disabled=move || pending.get()
                                class="mt-3 w-full sm:mt-0 sm:w-auto sm:flex-shrink-0 inline-flex items-center justify-center px-6 py-4 border border-transparent text-lg font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-75"
                            >
                                <Show when=move || pending.get() fallback=|| "Check IMEI">
                                    <Spinner />
                                    "Checking..."
                                </Show>
                            </button>
                        </form>
                        <div id="imei-result" class="mt-6">
                            {move || lookup.with(|state| match state {
                                RequestState::Ready(result) => {
                                    Some(view! { <LookupResultCard result=result.clone() /> }.into_any())
                                }
                                RequestState::Failed(message) => {
                                    Some(view! { <p class="text-sm text-red-600">{message.clone()}</p> }.into_any())
                                }
                                RequestState::Idle | RequestState::Pending => None,
                            })}
                        </div>
                    </div>
                </div>
            </header>
            <section class="bg-gray-50 py-20">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center">
                        <h2 class="text-base text-blue-600 font-semibold tracking-wide uppercase">"How It Works"</h2>
                        <p class="mt-2 text-3xl font-extrabold text-gray-900 tracking-tight sm:text-4xl">
                            "A Simple Process for Peace of Mind"
                        </p>
                    </div>
                    <div class="mt-12 grid gap-10 md:grid-cols-3">
                        {STEPS
                            .into_iter()
                            .map(|(number, title, body)| view! {
                                <div class="text-center p-6 bg-white rounded-lg shadow-md">
                                    <div class="text-4xl mb-4">{number}</div>
                                    <h3 class="text-xl font-bold">{title}</h3>
                                    <p class="mt-2 text-gray-500">{body}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}

/// Templated result block for a lookup
#[component]
fn LookupResultCard(result: LookupResult) -> impl IntoView {
    let class = match result.status {
        LookupStatus::Stolen => "p-4 rounded-md text-left bg-red-100 border-l-4 border-red-500 text-red-700",
        LookupStatus::Safe => "p-4 rounded-md text-left bg-green-100 border-l-4 border-green-500 text-green-700",
    };

    view! {
        <div class=class role="status">
            <p class="font-bold">{result.title()}</p>
            <p>{result.message}</p>
        </div>
    }
}
