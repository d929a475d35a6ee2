//! One-time-code step after sign-in

use crate::state::use_app_context;
use leptos::{html, prelude::*, task::spawn_local};
use safeimei_protocol::{OTP_LENGTH, OtpCode, OtpKey, RequestState};

fn key_from(ev: &leptos::ev::KeyboardEvent) -> OtpKey {
    let key = ev.key();
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        _ if key == "Backspace" => OtpKey::Backspace,
        (Some(c), None) => OtpKey::Digit(c),
        _ => OtpKey::Other,
    }
}

/// Six single-digit cells with automatic focus movement
///
/// The code is handed to the registry as typed; the in-memory registry
/// accepts any code.
#[component]
pub fn OtpPage() -> impl IntoView {
    let app = use_app_context();
    let code = RwSignal::new(OtpCode::new());
    let cells: [NodeRef<html::Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());
    let request = RwSignal::new(RequestState::<()>::default());
    let pending = Memo::new(move |_| request.with(RequestState::is_pending));

    let focus = move |index: usize| {
        if let Some(input) = cells.get(index).and_then(|cell| cell.get())
            && input.focus().is_err()
        {
            tracing::debug!(index, "could not focus code cell");
        }
    };

    Effect::new(move |_| focus(0));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !request.try_update(RequestState::try_begin).unwrap_or(false) {
            return;
        }

        let registry = app.registry();
        let entered = code.get_untracked().code();
        spawn_local(async move {
            let outcome = registry.verify_otp(&entered).await;
            if outcome.is_ok() {
                app.complete_authentication();
            }
            request.try_update(|state| state.settle(outcome.map_err(|e| e.user_message())));
        });
    };

    view! {
        <div class="min-h-screen bg-gray-100 flex flex-col justify-center py-12 sm:px-6 lg:px-8">
            <div class="sm:mx-auto sm:w-full sm:max-w-md">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">"Two-Factor Authentication"</h2>
                <p class="mt-2 text-center text-sm text-gray-600">"Enter the 6-digit code."</p>
            </div>
            <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md">
                <div class="bg-white py-8 px-4 shadow-lg sm:rounded-lg sm:px-10">
                    <form on:submit=on_submit>
                        <div class="flex justify-center gap-2 md:gap-4 mb-6">
                            {cells
                                .into_iter()
                                .enumerate()
                                .map(|(index, node_ref)| view! {
                                    <input
                                        node_ref=node_ref
                                        type="text"
                                        inputmode="numeric"
                                        maxlength="1"
                                        class="w-12 h-14 md:w-14 md:h-16 text-center text-2xl font-semibold border border-gray-300 rounded-lg"
                                        prop:value=move || code.with(|c| c.cell(index).map(String::from).unwrap_or_default())
                                        on:keydown=move |ev| {
                                            let key = key_from(&ev);
                                            if matches!(key, OtpKey::Other) {
                                                return;
                                            }
                                            ev.prevent_default();
                                            if let Some(next) = code.try_update(|c| c.handle_key(index, key)).flatten() {
                                                focus(next);
                                            }
                                        }
                                    />
                                })
                                .collect_view()}
                        </div>
                        <div class="text-sm text-red-600 mb-4 text-center" role="alert">
                            {move || request.with(|state| state.error().map(str::to_string))}
                        </div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full flex justify-center py-2 px-4 border rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-75"
                        >
                            {move || if pending.get() { "Verifying..." } else { "Verify" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

