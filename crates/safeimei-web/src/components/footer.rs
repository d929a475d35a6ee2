//! Public site footer

use crate::state::use_app_context;
use leptos::prelude::*;
use safeimei_types::PageId;

/// Footer with secondary links and the copyright line
#[component]
pub fn Footer() -> impl IntoView {
    let app = use_app_context();

    view! {
        <footer class="bg-white border-t">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="md:flex md:items-center md:justify-between">
                    <div class="flex justify-center space-x-6 md:order-2">
                        <button on:click=move |_| app.navigate(PageId::Contact) class="text-gray-400 hover:text-gray-500">
                            "Contact Us"
                        </button>
                        <span class="text-gray-300">"|"</span>
                        <button on:click=move |_| app.navigate(PageId::Privacy) class="text-gray-400 hover:text-gray-500">
                            "Privacy Policy"
                        </button>
                        <span class="text-gray-300">"|"</span>
                        <button on:click=move |_| app.navigate(PageId::Faq) class="text-gray-400 hover:text-gray-500">
                            "FAQ"
                        </button>
                    </div>
                    <div class="mt-8 md:mt-0 md:order-1">
                        <p class="text-center text-base text-gray-400">
                            "© 2025 SafeIMEI Nigeria. All rights reserved."
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
