//! Public navigation bar

use super::icons::{CloseIcon, MenuIcon, ShieldCheckIcon};
use crate::state::use_app_context;
use leptos::prelude::*;
use safeimei_types::PageId;

const LINKS: [PageId; 5] = [
    PageId::Home,
    PageId::About,
    PageId::Faq,
    PageId::Contact,
    PageId::Privacy,
];

/// Site navigation with a collapsible mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let app = use_app_context();
    let (menu_open, set_menu_open) = signal(false);

    let go = move |page: PageId| {
        set_menu_open.set(false);
        app.navigate(page);
    };

    view! {
        <nav class="bg-white/80 backdrop-blur-md shadow-sm fixed w-full z-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center">
                        <button
                            on:click=move |_| go(PageId::Home)
                            class="flex-shrink-0 flex items-center gap-2 text-xl font-bold text-blue-600"
                        >
                            <ShieldCheckIcon />
                            <span>"SafeIMEI"</span>
                        </button>
                    </div>

                    // Desktop nav
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {LINKS
                                .into_iter()
                                .map(move |page| {
                                    view! {
                                        <button
                                            on:click=move |_| go(page)
                                            class="text-gray-600 hover:bg-gray-100 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium"
                                        >
                                            {page.title()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <button
                                on:click=move |_| go(PageId::Login)
                                class="ml-4 bg-blue-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-blue-700"
                            >
                                "Officer Portal"
                            </button>
                        </div>
                    </div>

                    // Mobile menu button
                    <div class="-mr-2 flex md:hidden">
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            class="bg-gray-100 inline-flex items-center justify-center p-2 rounded-md text-gray-500 hover:text-gray-900 hover:bg-gray-200"
                            aria-label="Toggle menu"
                        >
                            <Show when=move || menu_open.get() fallback=|| view! { <MenuIcon /> }>
                                <CloseIcon />
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                        {LINKS
                            .into_iter()
                            .map(move |page| {
                                view! {
                                    <button
                                        on:click=move |_| go(page)
                                        class="text-gray-600 hover:bg-gray-100 hover:text-gray-900 block px-3 py-2 rounded-md text-base font-medium w-full text-left"
                                    >
                                        {page.title()}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            on:click=move |_| go(PageId::Login)
                            class="bg-blue-600 text-white mt-2 block px-3 py-2 rounded-md text-base font-medium w-full text-left hover:bg-blue-700"
                        >
                            "Officer Portal"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
