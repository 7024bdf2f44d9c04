//! Candidate pipeline — scores a pool of freelancers against one job and
//! arranges the survivors for display.

use rand::Rng;
use tracing::info;

use crate::matching::eligibility::EligibilityScorer;
use crate::matching::ordering::{order_candidates, RankedCandidate, SelectionMode};
use crate::matching::rank::RankTier;
use crate::models::FreelancerProfile;

/// Scores each freelancer, attaches a rank tier, optionally drops the
/// ineligible, then orders per `mode`.
pub fn evaluate_candidates<R: Rng + ?Sized>(
    scorer: &dyn EligibilityScorer,
    job_skills: &[String],
    freelancers: &[FreelancerProfile],
    mode: SelectionMode,
    eligible_only: bool,
    rng: &mut R,
) -> Vec<RankedCandidate> {
    let mut candidates: Vec<RankedCandidate> = freelancers
        .iter()
        .map(|f| RankedCandidate {
            freelancer_id: f.id.clone(),
            name: f.name.clone(),
            rank: RankTier::from_projects(f.projects_completed),
            eligibility: scorer.score(&f.skills, job_skills),
        })
        .filter(|c| !eligible_only || c.eligibility.eligible)
        .collect();

    order_candidates(&mut candidates, mode, rng);

    info!(
        pool = freelancers.len(),
        returned = candidates.len(),
        backend = scorer.backend(),
        ?mode,
        "evaluated candidates"
    );
    candidates
}
