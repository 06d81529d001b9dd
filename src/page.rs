//! Page identifiers and the navigation bar's layout.

use std::fmt;

use serde::Serialize;

/// One page of the application.
///
/// The set is closed: every identifier the controller can hold is one of
/// these variants. String identifiers that don't name a page resolve to
/// [`PageId::Welcome`] through [`PageId::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// Landing splash. No navigation bar.
    #[default]
    Welcome,
    Home,
    Modules,
    Drills,
    Dashboard,
    Alerts,
    About,
    /// Sign-in / sign-up form. No navigation bar.
    Login,
}

impl PageId {
    /// Every page, in declaration order.
    pub const ALL: [PageId; 8] = [
        PageId::Welcome,
        PageId::Home,
        PageId::Modules,
        PageId::Drills,
        PageId::Dashboard,
        PageId::Alerts,
        PageId::About,
        PageId::Login,
    ];

    /// Returns the stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Welcome => "welcome",
            PageId::Home => "home",
            PageId::Modules => "modules",
            PageId::Drills => "drills",
            PageId::Dashboard => "dashboard",
            PageId::Alerts => "alerts",
            PageId::About => "about",
            PageId::Login => "login",
        }
    }

    /// Returns the human-readable label used in menus.
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Welcome => "Welcome",
            PageId::Home => "Home",
            PageId::Modules => "Learning Modules",
            PageId::Drills => "Virtual Drills",
            PageId::Dashboard => "Dashboard",
            PageId::Alerts => "Emergency Alerts",
            PageId::About => "About Us",
            PageId::Login => "Sign In",
        }
    }

    /// Looks up a page by identifier. Matching is exact.
    pub fn parse(id: &str) -> Option<PageId> {
        PageId::ALL.into_iter().find(|page| page.as_str() == id)
    }

    /// Looks up a page by identifier, falling back to the landing page.
    ///
    /// ```rust
    /// use disastersafe::PageId;
    ///
    /// assert_eq!(PageId::resolve("drills"), PageId::Drills);
    /// assert_eq!(PageId::resolve("settings"), PageId::Welcome);
    /// ```
    pub fn resolve(id: &str) -> PageId {
        PageId::parse(id).unwrap_or_default()
    }

    /// Whether the navigation bar is drawn above this page.
    ///
    /// The bar is hidden on exactly two pages, `welcome` and `login`.
    pub fn shows_navigation(&self) -> bool {
        !matches!(self, PageId::Welcome | PageId::Login)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The navigation bar's page entries, in display order.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        page: PageId::Home,
        label: "Home",
        icon: "⛨",
    },
    NavItem {
        page: PageId::Modules,
        label: "Learning Modules",
        icon: "▤",
    },
    NavItem {
        page: PageId::Drills,
        label: "Virtual Drills",
        icon: "⚑",
    },
    NavItem {
        page: PageId::Dashboard,
        label: "Dashboard",
        icon: "▥",
    },
    NavItem {
        page: PageId::Alerts,
        label: "Emergency Alerts",
        icon: "⚠",
    },
    NavItem {
        page: PageId::About,
        label: "About Us",
        icon: "☏",
    },
];
