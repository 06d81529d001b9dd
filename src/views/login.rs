use serde_json::{json, Value};

use super::{Action, View};
use crate::page::PageId;

pub(super) struct LoginView;

// Neither form authenticates; both buttons only move on to the next page.
const ACTIONS: &[Action] = &[
    Action::new("Sign In", PageId::Dashboard),
    Action::new("Create Account", PageId::Home),
    Action::new("Learn about DisasterSafe", PageId::About),
];

const STATES: &[&str] = &[
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh", "Delhi", "Goa",
    "Gujarat", "Haryana", "Himachal Pradesh", "Jharkhand", "Karnataka", "Kerala",
    "Madhya Pradesh", "Maharashtra", "Manipur", "Meghalaya", "Mizoram", "Nagaland", "Odisha",
    "Punjab", "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura", "Uttar Pradesh",
    "Uttarakhand", "West Bengal",
];

impl View for LoginView {
    fn page(&self) -> PageId {
        PageId::Login
    }

    fn template(&self) -> &'static str {
        include_str!("../templates/login.tmpl")
    }

    fn data(&self) -> Value {
        json!({
            "title": "DisasterSafe Education",
            "subtitle": "Welcome Back",
            "sign_in": ["Email", "Password"],
            "sign_up": ["Full Name", "Email", "Password", "Role", "School Name", "State"],
            "roles": ["Student", "Teacher", "School Administrator", "Parent/Guardian", "Safety Coordinator"],
            "states": STATES,
            "notice": "Demo Access: use any email and password to explore the platform.",
        })
    }

    fn actions(&self) -> &'static [Action] {
        ACTIONS
    }
}
