//! Input-shape normalization at the request boundary.
//!
//! Skill lists reach the engine either as a JSON array or as one
//! comma-joined string ("React, Figma"). Both are converted to the canonical
//! `Vec<String>` here; the core never sees the joined form.

use serde::Deserialize;

use crate::models::FreelancerProfile;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SkillInput {
    List(Vec<String>),
    Joined(String),
}

impl Default for SkillInput {
    fn default() -> Self {
        SkillInput::List(Vec::new())
    }
}

impl SkillInput {
    /// Arrays pass through untouched. Joined strings are split on commas,
    /// each piece trimmed, blank pieces dropped.
    pub fn into_skills(self) -> Vec<String> {
        match self {
            SkillInput::List(items) => items,
            SkillInput::Joined(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// A freelancer as the marketplace sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct FreelancerInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: SkillInput,
    #[serde(default)]
    pub projects_completed: u32,
}

impl From<FreelancerInput> for FreelancerProfile {
    fn from(input: FreelancerInput) -> Self {
        FreelancerProfile {
            id: input.id,
            name: input.name,
            skills: input.skills.into_skills(),
            projects_completed: input.projects_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_input_passes_through() {
        let input: SkillInput = serde_json::from_str(r#"["React", " Figma "]"#).unwrap();
        assert_eq!(input.into_skills(), vec!["React", " Figma "]);
    }

    #[test]
    fn test_joined_input_is_split_and_trimmed() {
        let input: SkillInput = serde_json::from_str(r#""React, Figma ,, Node.js""#).unwrap();
        assert_eq!(input.into_skills(), vec!["React", "Figma", "Node.js"]);
    }

    #[test]
    fn test_blank_joined_input_is_empty() {
        let input: SkillInput = serde_json::from_str(r#""  ""#).unwrap();
        assert!(input.into_skills().is_empty());
    }

    #[test]
    fn test_freelancer_input_defaults() {
        let input: FreelancerInput = serde_json::from_str(r#"{"id": "f-1"}"#).unwrap();
        let profile: FreelancerProfile = input.into();
        assert_eq!(profile.id, "f-1");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.projects_completed, 0);
    }

    #[test]
    fn test_freelancer_input_with_joined_skills() {
        let input: FreelancerInput = serde_json::from_str(
            r#"{"id": "f-2", "name": "Ada", "skills": "SEO, Copywriting", "projects_completed": 12}"#,
        )
        .unwrap();
        let profile = FreelancerProfile::from(input);
        assert_eq!(profile.skills, vec!["SEO", "Copywriting"]);
        assert_eq!(profile.projects_completed, 12);
    }
}
