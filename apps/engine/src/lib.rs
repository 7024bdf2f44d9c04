//! Skill matching and recommendation engine.
//!
//! Fuzzy search over a fixed skill taxonomy, job-skill expansion, freelancer
//! eligibility scoring, rank tiers and candidate ordering. Pure in-memory
//! computation: callers own persistence, transport and presentation.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod requests;
pub mod search;
pub mod state;

pub use catalog::SkillCatalog;
pub use config::Config;
pub use errors::AppError;
pub use matching::{
    evaluate_candidates, EligibilityResult, EligibilityScorer, ExpandedSkillScorer,
    LiteralSkillScorer, RankTier, RankedCandidate, SelectionMode, SkillExpander,
};
pub use models::{FreelancerProfile, SearchQuery, SearchResult, SkillRecord};
pub use search::{IndexOptions, SkillIndex};
pub use state::AppState;
