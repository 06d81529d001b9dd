use serde_json::{json, Value};

use super::{Action, View};
use crate::page::PageId;

pub(super) struct HomeView;

const ACTIONS: &[Action] = &[
    Action::new("Explore Modules", PageId::Modules),
    Action::new("Start a Drill", PageId::Drills),
    Action::new("Explore a disaster module", PageId::Modules),
    Action::new("Get Started Today", PageId::Login),
    Action::new("Learn More", PageId::About),
];

impl View for HomeView {
    fn page(&self) -> PageId {
        PageId::Home
    }

    fn template(&self) -> &'static str {
        include_str!("../templates/home.tmpl")
    }

    fn data(&self) -> Value {
        json!({
            "badge": "🇮🇳 Designed for Indian Schools & Colleges",
            "headline": "Empowering Schools for a",
            "headline_accent": "Safer Tomorrow",
            "subtitle": "Comprehensive disaster preparedness education system with interactive learning, virtual drills, and real-time emergency communications.",
            "proof": ["500+ Schools", "50,000+ Students Trained"],
            "cta": {
                "title": "Ready to Make Your School Safer?",
                "body": "Join thousands of schools across India in building a culture of disaster preparedness and resilience.",
            },
            "features": [
                {
                    "title": "Interactive Learning Modules",
                    "description": "Region-specific disaster education with gamified experiences",
                },
                {
                    "title": "Virtual Drills",
                    "description": "Practice emergency procedures in safe, simulated environments",
                },
                {
                    "title": "Admin Dashboard",
                    "description": "Track preparedness metrics and drill participation",
                },
                {
                    "title": "Real-time Alerts",
                    "description": "Instant disaster warnings and emergency communications",
                },
            ],
            "disasters": [
                { "name": "Earthquake Safety", "region": "Seismic Zones", "icon": "🏗" },
                { "name": "Flood Preparedness", "region": "Coastal Areas", "icon": "🌊" },
                { "name": "Fire Evacuation", "region": "All Regions", "icon": "🔥" },
                { "name": "Cyclone Response", "region": "Eastern Coast", "icon": "🌀" },
            ],
            "testimonials": [
                {
                    "quote": "DisasterSafe Education has transformed how our students understand emergency preparedness.",
                    "author": "Dr. Priya Sharma",
                    "role": "Principal, Delhi Public School",
                },
                {
                    "quote": "The gamified approach makes learning about disasters engaging rather than frightening.",
                    "author": "Rajesh Kumar",
                    "role": "Safety Officer, Gujarat Education Board",
                },
            ],
        })
    }

    fn actions(&self) -> &'static [Action] {
        ACTIONS
    }
}
