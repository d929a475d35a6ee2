//! Main Leptos application component with page switching

use crate::{
    components::{Footer, Navbar, NotificationModal},
    pages::{
        AboutPage, ContactPage, CreateReportPage, DashboardPage, FaqPage, HomePage, LoginPage,
        OtpPage, PrivacyPage, ViewReportsPage,
    },
    state::AppContext,
};
use leptos::prelude::*;
use safeimei_core::Config;
use safeimei_registry::MockRegistry;
use safeimei_types::PageId;
use std::sync::Arc;

/// Main application component
///
/// Owns the shell state. The page is picked from a memo of the current
/// page id, so showing a notification does not remount the page beneath it.
#[component]
pub fn App() -> impl IntoView {
    let config = Config::default();
    let registry = Arc::new(MockRegistry::from_config(&config.registry));
    let app = AppContext::new(registry);
    provide_context(app);

    let page = Memo::new(move |_| app.current_page());
    let chrome = Memo::new(move |_| page.get().shows_chrome());

    view! {
        <Show when=move || chrome.get()>
            <Navbar />
        </Show>
        <div class=move || content_class(page.get())>{move || render_page(page.get())}</div>
        <Show when=move || chrome.get()>
            <Footer />
        </Show>
        <NotificationModal />
    }
}

/// Clears the fixed navbar; pages without chrome start at the top
const fn content_class(page: PageId) -> &'static str {
    if page.shows_chrome() { "pt-16" } else { "" }
}

fn render_page(page: PageId) -> AnyView {
    match page {
        PageId::Home => view! { <HomePage /> }.into_any(),
        PageId::About => view! { <AboutPage /> }.into_any(),
        PageId::Faq => view! { <FaqPage /> }.into_any(),
        PageId::Privacy => view! { <PrivacyPage /> }.into_any(),
        PageId::Contact => view! { <ContactPage /> }.into_any(),
        PageId::Login => view! { <LoginPage /> }.into_any(),
        PageId::Auth => view! { <OtpPage /> }.into_any(),
        PageId::Dashboard => view! { <DashboardPage /> }.into_any(),
        PageId::CreateReport => view! { <CreateReportPage /> }.into_any(),
        PageId::ViewReports => view! { <ViewReportsPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_only_public_pages_clear_the_navbar() {
        assert_eq!(content_class(PageId::Home), "pt-16");
        assert_eq!(content_class(PageId::Contact), "pt-16");
        assert_eq!(content_class(PageId::Login), "");
        assert_eq!(content_class(PageId::Auth), "");
        assert_eq!(content_class(PageId::Dashboard), "");
        assert_eq!(content_class(PageId::CreateReport), "");
        assert_eq!(content_class(PageId::ViewReports), "");
    }
}
