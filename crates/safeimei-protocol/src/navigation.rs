//! Page navigation and the application-wide state reducer

use safeimei_types::{NotificationState, PageId};

/// Which page is on screen and whether an officer has signed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Page currently rendered
    pub current_page: PageId,
    /// Set after the one-time-code step, cleared on logout
    pub is_authenticated: bool,
}

impl NavigationState {
    /// Move to `page`, redirecting protected pages to login when signed out
    #[must_use]
    pub const fn navigate_to(self, page: PageId) -> Self {
        let current_page = if page.is_protected() && !self.is_authenticated {
            PageId::Login
        } else {
            page
        };
        Self {
            current_page,
            ..self
        }
    }

    /// Move to the page named by `slug`; unknown slugs land on the home page
    #[must_use]
    pub fn navigate_to_slug(self, slug: &str) -> Self {
        self.navigate_to(slug.parse().unwrap_or_default())
    }

    /// Mark the session authenticated and open the dashboard
    #[must_use]
    pub const fn authenticate(self) -> Self {
        Self {
            current_page: PageId::Dashboard,
            is_authenticated: true,
        }
    }

    /// Clear authentication and return to the home page
    #[must_use]
    pub const fn logout(self) -> Self {
        Self {
            current_page: PageId::Home,
            is_authenticated: false,
        }
    }

    /// Whether the public nav bar and footer are rendered
    pub const fn shows_chrome(self) -> bool {
        self.current_page.shows_chrome()
    }
}

/// Cross-cutting state owned by the application shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Current page and auth flag
    pub navigation: NavigationState,
    /// The success modal
    pub notification: NotificationState,
}

/// Everything a child component may ask the shell to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Go to a page (subject to the protected-page rule)
    NavigateTo(PageId),
    /// Go to a page named by its slug
    NavigateToSlug(String),
    /// The one-time-code step was accepted
    CompleteAuthentication,
    /// Sign out
    Logout,
    /// Display the success modal, replacing any visible content
    ShowNotification {
        /// Modal heading
        title: String,
        /// Modal body
        message: String,
    },
    /// Close the success modal
    DismissNotification,
}

/// Apply `action` to `state`
pub fn reduce(state: AppState, action: Action) -> AppState {
    let AppState {
        navigation,
        notification,
    } = state;

    match action {
        Action::NavigateTo(page) => AppState {
            navigation: navigation.navigate_to(page),
            notification,
        },
        Action::NavigateToSlug(slug) => AppState {
            navigation: navigation.navigate_to_slug(&slug),
            notification,
        },
        Action::CompleteAuthentication => AppState {
            navigation: navigation.authenticate(),
            notification,
        },
        Action::Logout => AppState {
            navigation: navigation.logout(),
            notification,
        },
        Action::ShowNotification { title, message } => AppState {
            navigation,
            notification: NotificationState::shown(title, message),
        },
        Action::DismissNotification => AppState {
            navigation,
            notification: NotificationState::default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn any_page() -> impl Strategy<Value = PageId> {
        proptest::sample::select(PageId::ALL.to_vec())
    }

    fn signed_in() -> AppState {
        reduce(AppState::default(), Action::CompleteAuthentication)
    }

    #[test]
    fn test_starts_on_home_signed_out() {
        let state = AppState::default();
        assert_eq!(state.navigation.current_page, PageId::Home);
        assert!(!state.navigation.is_authenticated);
        assert!(!state.notification.visible);
    }

    #[test]
    fn test_protected_page_redirects_to_login() {
        for page in [PageId::Dashboard, PageId::CreateReport, PageId::ViewReports] {
            let state = reduce(AppState::default(), Action::NavigateTo(page));
            assert_eq!(state.navigation.current_page, PageId::Login);
        }
    }

    #[test]
    fn test_protected_page_reachable_after_auth() {
        let state = reduce(signed_in(), Action::NavigateTo(PageId::ViewReports));
        assert_eq!(state.navigation.current_page, PageId::ViewReports);
    }

    #[test]
    fn test_authentication_opens_dashboard() {
        let state = signed_in();
        assert_eq!(state.navigation.current_page, PageId::Dashboard);
        assert!(state.navigation.is_authenticated);
    }

    #[test]
    fn test_logout_returns_home_and_locks_portal() {
        let state = reduce(signed_in(), Action::Logout);
        assert_eq!(state.navigation.current_page, PageId::Home);
        assert!(!state.navigation.is_authenticated);

        let state = reduce(state, Action::NavigateTo(PageId::Dashboard));
        assert_eq!(state.navigation.current_page, PageId::Login);
    }

    #[test]
    fn test_unknown_slug_falls_back_to_home() {
        let state = reduce(
            AppState::default(),
            Action::NavigateTo(PageId::Faq),
        );
        let state = reduce(state, Action::NavigateToSlug("admin".to_string()));
        assert_eq!(state.navigation.current_page, PageId::Home);

        let state = reduce(state, Action::NavigateToSlug("privacy".to_string()));
        assert_eq!(state.navigation.current_page, PageId::Privacy);
    }

    #[test]
    fn test_notification_overwrites_in_place() {
        let state = reduce(
            AppState::default(),
            Action::ShowNotification {
                title: "First".to_string(),
                message: "one".to_string(),
            },
        );
        let state = reduce(
            state,
            Action::ShowNotification {
                title: "Second".to_string(),
                message: "two".to_string(),
            },
        );
        assert_eq!(state.notification, NotificationState::shown("Second", "two"));

        let state = reduce(state, Action::DismissNotification);
        assert!(!state.notification.visible);
    }

    #[test]
    fn test_notification_does_not_move_page() {
        let state = reduce(AppState::default(), Action::NavigateTo(PageId::Contact));
        let state = reduce(
            state,
            Action::ShowNotification {
                title: "Message Sent!".to_string(),
                message: "Thanks".to_string(),
            },
        );
        assert_eq!(state.navigation.current_page, PageId::Contact);
    }

    proptest! {
        #[test]
        fn test_public_pages_always_reachable(page in any_page(), authed in any::<bool>()) {
            prop_assume!(!page.is_protected());
            let nav = NavigationState { current_page: PageId::Home, is_authenticated: authed };
            prop_assert_eq!(nav.navigate_to(page).current_page, page);
        }

        #[test]
        fn test_protected_pages_gated(page in any_page(), from in any_page()) {
            prop_assume!(page.is_protected());
            let nav = NavigationState { current_page: from, is_authenticated: false };
            prop_assert_eq!(nav.navigate_to(page).current_page, PageId::Login);
        }

        #[test]
        fn test_navigation_never_changes_auth(page in any_page(), authed in any::<bool>()) {
            let nav = NavigationState { current_page: PageId::Home, is_authenticated: authed };
            prop_assert_eq!(nav.navigate_to(page).is_authenticated, authed);
        }
    }
}
