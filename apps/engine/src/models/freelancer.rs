use serde::{Deserialize, Serialize};

/// The slice of a freelancer profile the matcher needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects_completed: u32,
}
