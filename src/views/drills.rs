use serde_json::{json, Value};

use super::View;
use crate::page::PageId;

pub(super) struct DrillsView;

impl View for DrillsView {
    fn page(&self) -> PageId {
        PageId::Drills
    }

    fn template(&self) -> &'static str {
        include_str!("../templates/drills.tmpl")
    }

    fn data(&self) -> Value {
        json!({
            "title": "Virtual Drills",
            "subtitle": "Practice emergency procedures in safe, simulated environments",
            "drills": [
                {
                    "title": "Earthquake Drill",
                    "description": "Practice drop, cover, and hold procedures",
                    "duration": "5-8 minutes", "participants": "1-30 students", "difficulty": "Beginner",
                    "steps": ["Alert Phase", "Drop Action", "Cover Position", "Hold & Wait", "Evacuation", "Assembly Point"],
                    "last_score": 85,
                },
                {
                    "title": "Fire Evacuation Drill",
                    "description": "Orderly evacuation procedures and safety protocols",
                    "duration": "6-10 minutes", "participants": "5-50 students", "difficulty": "Intermediate",
                    "steps": ["Alarm Detection", "Alert Others", "Evacuation Route", "Exit Building", "Assembly Point", "Roll Call"],
                    "last_score": 92,
                },
                {
                    "title": "Flood Response Drill",
                    "description": "Preparation and evacuation for flood scenarios",
                    "duration": "8-12 minutes", "participants": "10-40 students", "difficulty": "Advanced",
                    "steps": ["Warning Phase", "Preparation", "Vertical Evacuation", "Safe Zone", "Communication", "Rescue Protocol"],
                    "last_score": null,
                },
                {
                    "title": "Security Lockdown Drill",
                    "description": "Secure classroom and building procedures",
                    "duration": "4-6 minutes", "participants": "1-25 students", "difficulty": "Intermediate",
                    "steps": ["Alert Recognition", "Secure Entry", "Communication Silence", "Safe Position", "Wait for All Clear", "Debrief"],
                    "last_score": 78,
                },
            ],
            "recent": [
                { "date": "2025-01-15", "type": "Fire Evacuation", "score": 92, "participants": 28 },
                { "date": "2025-01-10", "type": "Earthquake", "score": 85, "participants": 32 },
                { "date": "2025-01-05", "type": "Lockdown", "score": 78, "participants": 25 },
            ],
        })
    }
}
