//! Centered single-column layout for the information pages

use leptos::prelude::*;

/// Heading plus prose body
#[component]
pub fn SimplePage(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white">
            <div class="max-w-3xl mx-auto py-16 px-4 sm:px-6 lg:px-8">
                <h1 class="text-3xl font-extrabold text-gray-900 mb-6">{title}</h1>
                <div class="space-y-4 text-gray-600 leading-relaxed">{children()}</div>
            </div>
        </div>
    }
}
