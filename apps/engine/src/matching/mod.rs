// Matching: job-skill expansion, eligibility scoring, rank tiers and
// candidate ordering. Everything here is synchronous and allocation-light;
// the only shared state is the read-only `SkillIndex`.

pub mod eligibility;
pub mod expander;
pub mod ordering;
pub mod pipeline;
pub mod rank;

pub use eligibility::{
    EligibilityResult, EligibilityScorer, ExpandedSkillScorer, LiteralSkillScorer,
};
pub use expander::SkillExpander;
pub use ordering::{order_candidates, RankedCandidate, SelectionMode};
pub use pipeline::evaluate_candidates;
pub use rank::RankTier;
