//! Page views.
//!
//! A view is stateless: it knows its page, its template, the mock data the
//! template renders, and the navigation actions it offers. Actions are the
//! only way a view reaches back into the controller, through the
//! [`Navigate`] capability.

mod about;
mod alerts;
mod dashboard;
mod drills;
mod home;
mod login;
mod modules;
mod welcome;

use serde::Serialize;
use serde_json::Value;

use crate::controller::Navigate;
use crate::page::PageId;

/// A navigation request a view exposes, e.g. a "Get Started" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    pub label: &'static str,
    pub target: PageId,
}

impl Action {
    pub const fn new(label: &'static str, target: PageId) -> Self {
        Self { label, target }
    }

    /// Presses the button.
    pub fn invoke<N: Navigate + ?Sized>(&self, nav: &mut N) {
        nav.navigate(self.target);
    }
}

/// A presentation unit bound to one page.
pub trait View: Sync {
    fn page(&self) -> PageId;

    /// Minijinja source for the page body.
    fn template(&self) -> &'static str;

    /// Mock data the template renders, available as `view`.
    fn data(&self) -> Value;

    /// Navigation the page offers, in display order.
    fn actions(&self) -> &'static [Action] {
        &[]
    }

    /// Name the template is registered under.
    fn template_name(&self) -> String {
        format!("views/{}", self.page())
    }
}

static WELCOME: welcome::WelcomeView = welcome::WelcomeView;
static HOME: home::HomeView = home::HomeView;
static MODULES: modules::ModulesView = modules::ModulesView;
static DRILLS: drills::DrillsView = drills::DrillsView;
static DASHBOARD: dashboard::DashboardView = dashboard::DashboardView;
static ALERTS: alerts::AlertsView = alerts::AlertsView;
static ABOUT: about::AboutView = about::AboutView;
static LOGIN: login::LoginView = login::LoginView;

/// Returns the view bound to `page`.
pub fn view_for(page: PageId) -> &'static dyn View {
    match page {
        PageId::Welcome => &WELCOME,
        PageId::Home => &HOME,
        PageId::Modules => &MODULES,
        PageId::Drills => &DRILLS,
        PageId::Dashboard => &DASHBOARD,
        PageId::Alerts => &ALERTS,
        PageId::About => &ABOUT,
        PageId::Login => &LOGIN,
    }
}

/// Every view, in page order.
pub fn all_views() -> impl Iterator<Item = &'static dyn View> {
    PageId::ALL.into_iter().map(view_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<PageId>);

    impl Navigate for Recorder {
        fn navigate(&mut self, target: PageId) {
            self.0.push(target);
        }
    }

    #[test]
    fn test_view_for_is_bound_to_its_page() {
        for page in PageId::ALL {
            assert_eq!(view_for(page).page(), page);
        }
    }

    #[test]
    fn test_template_names_are_unique() {
        let mut names: Vec<String> = all_views().map(|v| v.template_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PageId::ALL.len());
    }

    #[test]
    fn test_view_data_is_an_object() {
        for view in all_views() {
            assert!(view.data().is_object(), "{} data", view.page());
        }
    }

    #[test]
    fn test_action_invoke_navigates() {
        let mut nav = Recorder(Vec::new());
        for action in view_for(PageId::Login).actions() {
            action.invoke(&mut nav);
        }
        assert_eq!(nav.0, vec![PageId::Dashboard, PageId::Home, PageId::About]);
    }

    #[test]
    fn test_welcome_enters_home() {
        let actions = view_for(PageId::Welcome).actions();
        assert_eq!(actions, &[Action::new("Enter Platform", PageId::Home)]);
    }

    #[test]
    fn test_dashboard_and_alerts_have_no_actions() {
        assert!(view_for(PageId::Dashboard).actions().is_empty());
        assert!(view_for(PageId::Alerts).actions().is_empty());
    }
}
