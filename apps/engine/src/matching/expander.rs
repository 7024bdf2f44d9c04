//! Skill Expander — widens a job's literal skill list before eligibility scoring.
//!
//! For every job skill the result holds:
//! 1. the trimmed literal, always
//! 2. the names of its top fuzzy matches
//! 3. every skill in each matched skill's category
//!
//! Step 3 is deliberately broad: one fuzzy hit pulls in a whole category, so
//! a short or generic job skill can make many freelancer skills count as
//! matches. Scores downstream depend on this; narrowing it changes every
//! match percentage.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::search::SkillIndex;

/// Fuzzy matches consulted per job skill.
pub const DEFAULT_EXPANSION_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct SkillExpander {
    index: Arc<SkillIndex>,
    limit: usize,
}

impl SkillExpander {
    pub fn new(index: Arc<SkillIndex>) -> Self {
        Self::with_limit(index, DEFAULT_EXPANSION_LIMIT)
    }

    pub fn with_limit(index: Arc<SkillIndex>, limit: usize) -> Self {
        SkillExpander { index, limit }
    }

    pub fn index(&self) -> &Arc<SkillIndex> {
        &self.index
    }

    pub fn expand(&self, job_skills: &[String]) -> BTreeSet<String> {
        let mut expanded = BTreeSet::new();

        for skill in job_skills {
            let literal = skill.trim();
            expanded.insert(literal.to_string());

            for hit in self.index.search(literal, self.limit) {
                for sibling in self.index.get_by_category(&hit.category) {
                    expanded.insert(sibling.name);
                }
                expanded.insert(hit.name);
            }
        }

        debug!(
            job_skills = job_skills.len(),
            expanded = expanded.len(),
            "expanded job skills"
        );
        expanded
    }
}
