//! Page identifiers for the single-page shell

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Every page the shell can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageId {
    /// Landing page with the public IMEI lookup
    #[default]
    Home,
    /// About the registry
    About,
    /// Frequently asked questions
    Faq,
    /// Privacy policy
    Privacy,
    /// Contact form
    Contact,
    /// Officer portal login
    Login,
    /// One-time-code step after login
    Auth,
    /// Officer dashboard
    Dashboard,
    /// Multi-step report wizard
    CreateReport,
    /// Station report listing
    ViewReports,
}

impl PageId {
    /// All pages in declaration order
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::About,
        Self::Faq,
        Self::Privacy,
        Self::Contact,
        Self::Login,
        Self::Auth,
        Self::Dashboard,
        Self::CreateReport,
        Self::ViewReports,
    ];

    /// Pages that require an authenticated officer
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard | Self::CreateReport | Self::ViewReports)
    }

    /// Public pages render the site nav bar and footer
    pub const fn shows_chrome(self) -> bool {
        matches!(
            self,
            Self::Home | Self::About | Self::Faq | Self::Privacy | Self::Contact
        )
    }

    /// Stable slug, matching the serialized form
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Faq => "faq",
            Self::Privacy => "privacy",
            Self::Contact => "contact",
            Self::Login => "login",
            Self::Auth => "auth",
            Self::Dashboard => "dashboard",
            Self::CreateReport => "createReport",
            Self::ViewReports => "viewReports",
        }
    }

    /// Human readable title for headings and navigation
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Faq => "FAQ",
            Self::Privacy => "Privacy",
            Self::Contact => "Contact",
            Self::Login => "Officer Portal Login",
            Self::Auth => "Two-Factor Authentication",
            Self::Dashboard => "Officer Dashboard",
            Self::CreateReport => "Create New Report",
            Self::ViewReports => "Station Reports",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| TypesError::UnknownPage {
                slug: s.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_protected_set() {
        let protected: Vec<PageId> = PageId::ALL
            .into_iter()
            .filter(|p| p.is_protected())
            .collect();
        assert_eq!(
            protected,
            vec![PageId::Dashboard, PageId::CreateReport, PageId::ViewReports]
        );
    }

    #[test]
    fn test_chrome_only_on_public_pages() {
        for page in [PageId::Login, PageId::Auth, PageId::Dashboard] {
            assert!(!page.shows_chrome(), "{page} should hide chrome");
        }
        for page in [PageId::Home, PageId::Faq, PageId::Contact] {
            assert!(page.shows_chrome(), "{page} should show chrome");
        }
    }

    #[test]
    fn test_slug_parse() {
        for page in PageId::ALL {
            assert_eq!(page.slug().parse::<PageId>(), Ok(page));
        }
        assert!("settings".parse::<PageId>().is_err());
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&PageId::CreateReport).unwrap();
        assert_eq!(json, "\"createReport\"");
    }
}
