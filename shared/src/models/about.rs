//! About Page Model

use serde::{Deserialize, Serialize};

/// Titled block of prose (story, mission)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// One of the restaurant's guiding principles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub bio: String,
}

/// The about document (`about.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub story: Section,
    pub mission: Section,
    #[serde(default)]
    pub values: Vec<CoreValue>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    /// Recruiting contact for the "Join Our Journey" link
    #[serde(default = "default_careers_email")]
    pub careers_email: String,
}

fn default_careers_email() -> String {
    "careers@bellavistacafe.com".to_string()
}
