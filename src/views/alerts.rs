use serde_json::{json, Value};

use super::View;
use crate::page::PageId;

pub(super) struct AlertsView;

impl View for AlertsView {
    fn page(&self) -> PageId {
        PageId::Alerts
    }

    fn template(&self) -> &'static str {
        include_str!("../templates/alerts.tmpl")
    }

    fn data(&self) -> Value {
        json!({
            "title": "Emergency Alerts",
            "subtitle": "Disaster warnings and emergency communications for schools",
            "active": [
                {
                    "type": "Cyclone Warning", "severity": "high",
                    "region": "Odisha Coastal Districts",
                    "message": "Severe cyclonic storm expected to make landfall within 48 hours. Schools advised to suspend classes and initiate evacuation procedures.",
                    "issued": "2 hours ago", "source": "IMD (India Meteorological Department)",
                    "instructions": [
                        "Suspend all school activities immediately",
                        "Ensure all students reach home safely",
                        "Secure school property and important documents",
                        "Monitor weather updates continuously",
                    ],
                },
                {
                    "type": "Flood Alert", "severity": "medium",
                    "region": "Kerala - Kottayam District",
                    "message": "Heavy rainfall causing water logging in low-lying areas. Schools in affected areas should remain vigilant.",
                    "issued": "6 hours ago", "source": "State Disaster Management Authority",
                    "instructions": [
                        "Monitor local water levels",
                        "Prepare evacuation routes",
                        "Keep emergency supplies ready",
                        "Maintain communication with authorities",
                    ],
                },
                {
                    "type": "Heat Wave Warning", "severity": "medium",
                    "region": "Rajasthan, Haryana, Delhi",
                    "message": "Extreme heat wave conditions expected. Schools advised to adjust timings and ensure adequate hydration facilities.",
                    "issued": "12 hours ago", "source": "National Disaster Management Authority",
                    "instructions": [
                        "Modify school timings (early morning hours)",
                        "Ensure adequate drinking water supply",
                        "Avoid outdoor activities during peak hours",
                        "Watch for heat-related illness symptoms",
                    ],
                },
            ],
            "recent": [
                { "type": "Earthquake", "region": "Himachal Pradesh", "detail": "Magnitude 4.2", "time": "1 day ago", "severity": "low" },
                { "type": "Landslide Warning", "region": "Uttarakhand", "detail": "", "time": "2 days ago", "severity": "medium" },
                { "type": "Fire Incident", "region": "Maharashtra", "detail": "", "time": "3 days ago", "severity": "high" },
                { "type": "Heavy Rainfall", "region": "Tamil Nadu", "detail": "", "time": "4 days ago", "severity": "medium" },
            ],
            "channels": [
                { "name": "Emergency Hotline", "contact": "1078", "description": "NDMA National Emergency Helpline", "available": "24/7" },
                { "name": "WhatsApp Alerts", "contact": "Join Group", "description": "Real-time alerts and updates", "available": "Active" },
                { "name": "All India Radio", "contact": "FM 102.6", "description": "Emergency broadcasts and updates", "available": "Live" },
                { "name": "Doordarshan News", "contact": "DD National", "description": "Official government announcements", "available": "Live" },
            ],
            "numbers": [
                { "service": "Fire Department", "number": "101", "description": "Fire emergencies and rescue" },
                { "service": "Police", "number": "100", "description": "Security and law enforcement" },
                { "service": "Ambulance", "number": "108", "description": "Medical emergencies" },
                { "service": "Disaster Helpline", "number": "1078", "description": "Disaster management support" },
                { "service": "Women Helpline", "number": "1091", "description": "Women safety and support" },
                { "service": "Child Helpline", "number": "1098", "description": "Child protection services" },
            ],
        })
    }
}
