//! Loading indicators

use leptos::prelude::*;

/// Small inline spinner for buttons and table rows
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span
            class="inline-block h-4 w-4 mr-2 align-middle border-2 border-current border-t-transparent rounded-full animate-spin"
            aria-hidden="true"
        ></span>
    }
}
