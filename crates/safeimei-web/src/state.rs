//! Application state shared through context

use leptos::prelude::*;
use safeimei_protocol::{Action, AppState, NotificationSink, reduce};
use safeimei_registry::RegistryService;
use safeimei_types::{NotificationState, PageId};
use std::{fmt, sync::Arc};

/// Handle to the shell state and the registry
///
/// Every page reads navigation and the notification from here and asks for
/// changes through [`AppContext::dispatch`].
#[derive(Clone, Copy)]
pub struct AppContext {
    state: RwSignal<AppState>,
    registry: StoredValue<Arc<dyn RegistryService>>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("state", &self.state.get_untracked())
            .field("registry", &self.registry.with_value(|r| r.name().to_string()))
            .finish()
    }
}

impl AppContext {
    /// Create the shell state on the home page, signed out
    pub fn new(registry: Arc<dyn RegistryService>) -> Self {
        Self {
            state: RwSignal::new(AppState::default()),
            registry: StoredValue::new(registry),
        }
    }

    /// The registry the pages call
    pub fn registry(&self) -> Arc<dyn RegistryService> {
        self.registry.get_value()
    }

    /// Apply an action to the shell state
    pub fn dispatch(&self, action: Action) {
        let from = self.state.with_untracked(|s| s.navigation.current_page);
        tracing::debug!(?action, %from, "dispatch");
        self.state
            .update(|state| *state = reduce(std::mem::take(state), action));
    }

    /// Go to `page`, or to the login page if it is protected and nobody is
    /// signed in
    pub fn navigate(&self, page: PageId) {
        self.dispatch(Action::NavigateTo(page));
    }

    /// Mark the officer signed in and open the dashboard
    pub fn complete_authentication(&self) {
        self.dispatch(Action::CompleteAuthentication);
    }

    /// Sign out and return home
    pub fn logout(&self) {
        self.dispatch(Action::Logout);
    }

    /// Close the success modal
    pub fn dismiss_notification(&self) {
        self.dispatch(Action::DismissNotification);
    }

    /// Page on screen (tracked)
    pub fn current_page(&self) -> PageId {
        self.state.with(|s| s.navigation.current_page)
    }

    /// Whether an officer is signed in (tracked)
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.navigation.is_authenticated)
    }

    /// The success modal (tracked)
    pub fn notification(&self) -> NotificationState {
        self.state.with(|s| s.notification.clone())
    }
}

impl NotificationSink for AppContext {
    fn notify(&self, title: &str, message: &str) {
        self.dispatch(Action::ShowNotification {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

/// Fetch the [`AppContext`] provided by [`crate::App`]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use safeimei_registry::MockRegistry;

    fn with_context(test: impl FnOnce(AppContext)) {
        let owner = Owner::new();
        owner.with(|| test(AppContext::new(Arc::new(MockRegistry::new()))));
    }

    #[test]
    fn test_starts_home_signed_out() {
        with_context(|app| {
            assert_eq!(app.current_page(), PageId::Home);
            assert!(!app.is_authenticated());
            assert_eq!(app.registry().name(), "mock");
        });
    }

    #[test]
    fn test_portal_gated_until_authenticated() {
        with_context(|app| {
            app.navigate(PageId::ViewReports);
            assert_eq!(app.current_page(), PageId::Login);

            app.complete_authentication();
            assert_eq!(app.current_page(), PageId::Dashboard);

            app.navigate(PageId::ViewReports);
            assert_eq!(app.current_page(), PageId::ViewReports);

            app.logout();
            assert_eq!(app.current_page(), PageId::Home);
            assert!(!app.is_authenticated());
        });
    }

    #[test]
    fn test_notify_shows_modal_without_navigation() {
        with_context(|app| {
            app.navigate(PageId::Contact);
            app.notify("Message Sent!", "Thanks");

            assert_eq!(app.current_page(), PageId::Contact);
            assert_eq!(app.notification(), NotificationState::shown("Message Sent!", "Thanks"));

            app.dismiss_notification();
            assert!(!app.notification().visible);
        });
    }
}
