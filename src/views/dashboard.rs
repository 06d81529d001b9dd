use serde_json::{json, Value};

use super::View;
use crate::page::PageId;

pub(super) struct DashboardView;

impl View for DashboardView {
    fn page(&self) -> PageId {
        PageId::Dashboard
    }

    fn template(&self) -> &'static str {
        include_str!("../templates/dashboard.tmpl")
    }

    fn data(&self) -> Value {
        json!({
            "title": "Admin Dashboard",
            "subtitle": "Monitor school-wide disaster preparedness and safety metrics",
            "module_completion": [
                { "name": "Earthquake Safety", "completed": 85 },
                { "name": "Fire Evacuation", "completed": 92 },
                { "name": "Flood Response", "completed": 67 },
                { "name": "First Aid", "completed": 78 },
                { "name": "Communication", "completed": 45 },
            ],
            "participation": [
                { "name": "Class 1", "value": 95 },
                { "name": "Class 2", "value": 88 },
                { "name": "Class 3", "value": 92 },
                { "name": "Class 4", "value": 85 },
                { "name": "Class 5", "value": 90 },
                { "name": "Class 6", "value": 87 },
            ],
            "preparedness": [
                { "name": "Excellent", "value": 35, "style": "level_excellent" },
                { "name": "Good", "value": 45, "style": "level_good" },
                { "name": "Needs Improvement", "value": 20, "style": "level_needs_improvement" },
            ],
            "weekly": [
                { "week": "Week 1", "modules": 45, "drills": 12 },
                { "week": "Week 2", "modules": 52, "drills": 15 },
                { "week": "Week 3", "modules": 48, "drills": 18 },
                { "week": "Week 4", "modules": 65, "drills": 22 },
            ],
            "contacts": [
                { "name": "Local Fire Department", "number": "101", "type": "Emergency" },
                { "name": "Police Station", "number": "100", "type": "Emergency" },
                { "name": "Ambulance Service", "number": "108", "type": "Medical" },
                { "name": "NDMA Helpline", "number": "1078", "type": "Disaster" },
                { "name": "District Collector", "number": "+91-99XXX-XXXXX", "type": "Administrative" },
            ],
            "recent_alerts": [
                { "type": "Weather Warning", "message": "Heavy rainfall expected in next 24 hours", "severity": "medium", "time": "2 hours ago" },
                { "type": "Drill Reminder", "message": "Monthly fire drill scheduled for tomorrow", "severity": "low", "time": "1 day ago" },
                { "type": "System Update", "message": "New earthquake safety module available", "severity": "low", "time": "3 days ago" },
            ],
        })
    }
}
