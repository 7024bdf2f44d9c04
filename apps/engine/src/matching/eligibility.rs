//! Eligibility scoring — pluggable, trait-based scorer that measures a
//! freelancer's declared skills against a job's required skills.
//!
//! Default: `ExpandedSkillScorer` (job skills widened by `SkillExpander`).
//! Alternative: `LiteralSkillScorer` (trimmed literals only, no fuzzy growth).
//!
//! `AppState` holds an `Arc<dyn EligibilityScorer>`, chosen at startup via config.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::expander::SkillExpander;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of scoring one freelancer against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    /// matched / required × 100, two decimals. Can exceed 100 when a
    /// freelancer lists several skills that each match.
    pub match_score: f64,
    /// Freelancer skills that matched, in their original order and casing.
    pub matched_skills: Vec<String>,
}

impl EligibilityResult {
    fn unconstrained(freelancer_skills: &[String]) -> Self {
        EligibilityResult {
            eligible: true,
            match_score: 100.0,
            matched_skills: freelancer_skills.to_vec(),
        }
    }

    fn no_skills() -> Self {
        EligibilityResult {
            eligible: false,
            match_score: 0.0,
            matched_skills: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the request
/// boundary or the candidate pipeline.
pub trait EligibilityScorer: Send + Sync {
    fn score(&self, freelancer_skills: &[String], job_skills: &[String]) -> EligibilityResult;

    /// "expanded" | "literal", reported back to callers.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// Backends
// ────────────────────────────────────────────────────────────────────────────

pub struct ExpandedSkillScorer {
    expander: SkillExpander,
}

impl ExpandedSkillScorer {
    pub fn new(expander: SkillExpander) -> Self {
        ExpandedSkillScorer { expander }
    }
}

impl EligibilityScorer for ExpandedSkillScorer {
    fn score(&self, freelancer_skills: &[String], job_skills: &[String]) -> EligibilityResult {
        compute_eligibility(freelancer_skills, job_skills, |jobs| {
            self.expander.expand(jobs)
        })
    }

    fn backend(&self) -> &'static str {
        "expanded"
    }
}

pub struct LiteralSkillScorer;

impl EligibilityScorer for LiteralSkillScorer {
    fn score(&self, freelancer_skills: &[String], job_skills: &[String]) -> EligibilityResult {
        compute_eligibility(freelancer_skills, job_skills, |jobs| {
            jobs.iter().map(|s| s.trim().to_string()).collect()
        })
    }

    fn backend(&self) -> &'static str {
        "literal"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Shared scoring rules; `widen` turns the raw job list into the accepted set.
fn compute_eligibility<F>(
    freelancer_skills: &[String],
    job_skills: &[String],
    widen: F,
) -> EligibilityResult
where
    F: FnOnce(&[String]) -> BTreeSet<String>,
{
    if job_skills.is_empty() {
        return EligibilityResult::unconstrained(freelancer_skills);
    }
    if freelancer_skills.is_empty() {
        return EligibilityResult::no_skills();
    }

    let accepted: HashSet<String> = widen(job_skills)
        .iter()
        .map(|s| normalize_skill(s))
        .collect();

    let matched_skills: Vec<String> = freelancer_skills
        .iter()
        .filter(|s| accepted.contains(&normalize_skill(s)))
        .cloned()
        .collect();

    // Denominator is the literal requirement count, duplicates included.
    let match_score = round2(matched_skills.len() as f64 / job_skills.len() as f64 * 100.0);

    debug!(
        required = job_skills.len(),
        accepted = accepted.len(),
        matched = matched_skills.len(),
        match_score,
        "scored eligibility"
    );

    EligibilityResult {
        eligible: !matched_skills.is_empty(),
        match_score,
        matched_skills,
    }
}

pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
