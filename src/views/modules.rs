use serde_json::{json, Value};

use super::View;
use crate::page::PageId;

pub(super) struct ModulesView;

impl View for ModulesView {
    fn page(&self) -> PageId {
        PageId::Modules
    }

    fn template(&self) -> &'static str {
        include_str!("../templates/modules.tmpl")
    }

    fn data(&self) -> Value {
        json!({
            "title": "Learning Modules",
            "subtitle": "Region-specific disaster preparedness courses for students and teachers",
            "regions": [
                "All Regions", "Coastal Areas", "Seismic Zones",
                "Flood Prone Areas", "Cyclone Regions", "Drought Areas",
            ],
            "modules": [
                {
                    "title": "Earthquake Safety Fundamentals",
                    "description": "Learn drop, cover, and hold techniques for earthquake situations",
                    "duration": "45 mins", "difficulty": "Beginner", "region": "Seismic Zones",
                    "progress": 75, "rating": 4.8, "students": 1250,
                    "badges": ["Interactive", "Audio Enabled"],
                },
                {
                    "title": "Flood Response and Evacuation",
                    "description": "Essential skills for flood preparation and safe evacuation procedures",
                    "duration": "60 mins", "difficulty": "Intermediate", "region": "Coastal Areas",
                    "progress": 30, "rating": 4.9, "students": 980,
                    "badges": ["Regional Specific", "Video Content"],
                },
                {
                    "title": "Fire Safety and Evacuation Drills",
                    "description": "Complete guide to fire prevention and emergency evacuation",
                    "duration": "50 mins", "difficulty": "Beginner", "region": "All Regions",
                    "progress": 100, "rating": 4.7, "students": 2100,
                    "badges": ["Completed", "Certificate"],
                },
                {
                    "title": "Cyclone Preparedness",
                    "description": "Understanding cyclone warnings and protection strategies",
                    "duration": "40 mins", "difficulty": "Intermediate", "region": "Cyclone Regions",
                    "progress": 0, "rating": 4.6, "students": 750,
                    "badges": ["New", "Interactive"],
                },
                {
                    "title": "First Aid and Emergency Response",
                    "description": "Basic first aid skills for disaster situations",
                    "duration": "35 mins", "difficulty": "Beginner", "region": "All Regions",
                    "progress": 60, "rating": 4.9, "students": 1800,
                    "badges": ["Practical", "Hands-on"],
                },
                {
                    "title": "Communication During Emergencies",
                    "description": "How to maintain contact and share information during disasters",
                    "duration": "30 mins", "difficulty": "Beginner", "region": "All Regions",
                    "progress": 0, "rating": 4.5, "students": 650,
                    "badges": ["Communication", "Technology"],
                },
            ],
        })
    }
}
