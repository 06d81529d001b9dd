use serde_json::{json, Value};

use super::{Action, View};
use crate::page::PageId;

pub(super) struct AboutView;

const ACTIONS: &[Action] = &[
    Action::new("Get Started Today", PageId::Home),
    Action::new("Join Our Mission", PageId::Login),
];

impl View for AboutView {
    fn page(&self) -> PageId {
        PageId::About
    }

    fn template(&self) -> &'static str {
        include_str!("../templates/about.tmpl")
    }

    fn data(&self) -> Value {
        json!({
            "title": "About DisasterSafe Education",
            "intro": "Empowering India's educational institutions with comprehensive disaster preparedness training, real-time emergency communication, and evidence-based safety protocols.",
            "mission": "To create a safer learning environment across India by providing comprehensive disaster preparedness education that is accessible, engaging, and culturally relevant to diverse school communities.",
            "vision": "A resilient India where every school is prepared for disasters, every student knows how to respond to emergencies, and communities work together to build a culture of safety and preparedness.",
            "values": [
                { "title": "Safety First", "description": "Every decision prioritizes the safety and well-being of students, teachers, and school communities." },
                { "title": "Inclusive Education", "description": "Making disaster preparedness accessible to all students regardless of background or abilities." },
                { "title": "Cultural Sensitivity", "description": "Respecting and incorporating India's diverse cultural contexts in our educational approach." },
                { "title": "Evidence-Based", "description": "Using scientific research and proven methodologies to ensure effective learning outcomes." },
                { "title": "Community Focus", "description": "Building strong partnerships with schools, families, and local communities." },
                { "title": "Continuous Improvement", "description": "Constantly evolving our platform based on feedback and emerging best practices." },
            ],
            "achievements": [
                { "number": "500+", "label": "Schools Enrolled" },
                { "number": "50,000+", "label": "Students Trained" },
                { "number": "2,000+", "label": "Teachers Certified" },
                { "number": "15+", "label": "States Covered" },
                { "number": "95%", "label": "Satisfaction Rate" },
                { "number": "24/7", "label": "Support Available" },
            ],
            "team": [
                { "name": "Dr. Rajesh Kumar", "role": "Chief Disaster Management Expert", "description": "Former NDMA official with 15+ years in disaster preparedness" },
                { "name": "Priya Sharma", "role": "Education Technology Lead", "description": "Specialized in gamified learning and educational platforms" },
                { "name": "Ankit Patel", "role": "Regional Safety Coordinator", "description": "Expert in region-specific disaster patterns across India" },
                { "name": "Meera Singh", "role": "Community Outreach Director", "description": "Building partnerships with schools and educational institutions" },
            ],
            "partners": [
                { "name": "National Disaster Management Authority (NDMA)", "role": "Primary Government Partner" },
                { "name": "Ministry of Education, Government of India", "role": "Educational Implementation Partner" },
                { "name": "UN Office for Disaster Risk Reduction (UNDRR)", "role": "International Standards Partner" },
                { "name": "Indian Red Cross Society", "role": "Training and Response Partner" },
                { "name": "State Education Departments", "role": "Implementation Partners" },
            ],
        })
    }

    fn actions(&self) -> &'static [Action] {
        ACTIONS
    }
}
