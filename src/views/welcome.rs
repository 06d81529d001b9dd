use serde_json::{json, Value};

use super::{Action, View};
use crate::page::PageId;

pub(super) struct WelcomeView;

const ACTIONS: &[Action] = &[Action::new("Enter Platform", PageId::Home)];

impl View for WelcomeView {
    fn page(&self) -> PageId {
        PageId::Welcome
    }

    fn template(&self) -> &'static str {
        include_str!("../templates/welcome.tmpl")
    }

    fn data(&self) -> Value {
        json!({
            "brand": "DisasterSafe",
            "tagline": "Empowering Indian schools with comprehensive disaster preparedness education",
        })
    }

    fn actions(&self) -> &'static [Action] {
        ACTIONS
    }
}
