//! Officer sign-in

use crate::state::use_app_context;
use leptos::{prelude::*, task::spawn_local};
use safeimei_protocol::{LoginForm, RequestState};
use safeimei_registry::AuthSession;
use safeimei_types::PageId;

/// Station ID and password form
///
/// Blank fields are refused before the registry is called; any other
/// rejection comes back from the registry with its own message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app_context();
    let (station_id, set_station_id) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let error = RwSignal::new(None::<String>);
    let request = RwSignal::new(RequestState::<AuthSession>::default());
    let pending = Memo::new(move |_| request.with(RequestState::is_pending));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm::new(station_id.get_untracked(), password.get_untracked());
        if let Err(e) = form.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        if !request.try_update(RequestState::try_begin).unwrap_or(false) {
            return;
        }
        error.set(None);

        let registry = app.registry();
        spawn_local(async move {
            let outcome = registry.authenticate(&form.station_id, &form.password).await;
            match &outcome {
                Ok(session) => {
                    tracing::info!(station_id = %session.station_id, "credentials accepted");
                    app.navigate(PageId::Auth);
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
            request.try_update(|state| state.settle(outcome));
        });
    };

    view! {
        <div class="min-h-screen bg-gray-100 flex flex-col justify-center py-12 sm:px-6 lg:px-8">
            <div class="sm:mx-auto sm:w-full sm:max-w-md">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">"Officer Portal Login"</h2>
            </div>
            <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md">
                <div class="bg-white py-8 px-4 shadow-lg sm:rounded-lg sm:px-10">
                    <form on:submit=on_submit class="space-y-6" novalidate>
                        <div>
                            <label for="stationId" class="block text-sm font-medium text-gray-700">"Station ID"</label>
                            <div class="mt-1">
                                <input
                                    id="stationId"
                                    name="stationId"
                                    type="text"
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm"
                                    prop:value=station_id
                                    on:input=move |ev| set_station_id.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700">"Password"</label>
                            <div class="mt-1">
                                <input
                                    id="password"
                                    name="password"
                                    type="password"
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm"
                                    prop:value=password
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="text-sm text-red-600" role="alert">{move || error.get()}</div>
                        <div>
                            <button
                                type="submit"
                                disabled=move || pending.get()
                                class="w-full flex justify-center py-2 px-4 border rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-75"
                            >
                                {move || if pending.get() { "Signing in..." } else { "Login" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
