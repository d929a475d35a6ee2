//! The success modal

use crate::state::use_app_context;
use leptos::prelude::*;

/// Modal shown while the shell's notification is visible
#[component]
pub fn NotificationModal() -> impl IntoView {
    let app = use_app_context();
    let notification = Memo::new(move |_| app.notification());

    view! {
        <Show when=move || notification.with(|n| n.visible)>
            <div
                id="success-modal"
                class="fixed inset-0 bg-gray-600 bg-opacity-50 overflow-y-auto h-full w-full z-50"
                role="dialog"
                aria-modal="true"
            >
                <div class="relative top-20 mx-auto p-5 border w-96 shadow-lg rounded-md bg-white">
                    <div class="mt-3 text-center">
                        <div class="mx-auto flex items-center justify-center h-12 w-12 rounded-full bg-green-100">
                            <svg class="h-6 w-6 text-green-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path>
                            </svg>
                        </div>
                        <h3 class="text-lg leading-6 font-medium text-gray-900 mt-2">
                            {move || notification.with(|n| n.title.clone())}
                        </h3>
                        <div class="mt-2 px-7 py-3">
                            <p class="text-sm text-gray-500">
                                {move || notification.with(|n| n.message.clone())}
                            </p>
                        </div>
                        <div class="items-center px-4 py-3">
                            <button
                                on:click=move |_| app.dismiss_notification()
                                class="px-4 py-2 bg-green-500 text-white text-base font-medium rounded-md w-full shadow-sm hover:bg-green-600"
                            >
                                "OK"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
