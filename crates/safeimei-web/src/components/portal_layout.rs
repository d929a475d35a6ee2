//! Frame around the signed-in officer pages

use super::icons::ShieldCheckIcon;
use crate::state::use_app_context;
use leptos::prelude::*;
use safeimei_types::PageId;

/// Portal header with Dashboard and Logout, wrapping `children`
#[component]
pub fn PortalLayout(children: Children) -> impl IntoView {
    let app = use_app_context();

    view! {
        <div class="min-h-screen bg-gray-100">
            <nav class="bg-white border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16">
                        <div class="flex-shrink-0 flex items-center gap-2 text-xl font-bold text-blue-600">
                            <ShieldCheckIcon />
                            <span>"SafeIMEI Officer Portal"</span>
                        </div>
                        <div class="flex items-center">
                            <button
                                on:click=move |_| app.navigate(PageId::Dashboard)
                                class="hidden sm:block text-sm font-medium text-gray-500 hover:text-gray-700 mr-4"
                            >
                                "Dashboard"
                            </button>
                            <button
                                on:click=move |_| app.logout()
                                class="text-sm font-medium text-red-500 hover:text-red-700"
                            >
                                "Logout"
                            </button>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="py-6">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">{children()}</div>
            </main>
        </div>
    }
}
