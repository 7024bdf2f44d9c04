use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::matching::eligibility::EligibilityResult;
use crate::matching::rank::RankTier;

/// How a candidate list is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Highest match score first.
    #[default]
    #[serde(rename = "match", alias = "best_match")]
    BestMatch,
    /// No implied ranking: candidates are shuffled on every call.
    #[serde(rename = "random", alias = "open_to_all")]
    OpenToAll,
}

/// A freelancer scored against one job, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub freelancer_id: String,
    pub name: Option<String>,
    pub rank: RankTier,
    #[serde(flatten)]
    pub eligibility: EligibilityResult,
}

/// Arranges `candidates` in place for the given mode.
///
/// Best-match ordering is stable: score descending, then rank tier
/// descending, then the order the caller supplied.
pub fn order_candidates<R: Rng + ?Sized>(
    candidates: &mut [RankedCandidate],
    mode: SelectionMode,
    rng: &mut R,
) {
    match mode {
        SelectionMode::BestMatch => candidates.sort_by(|a, b| {
            b.eligibility
                .match_score
                .total_cmp(&a.eligibility.match_score)
                .then_with(|| b.rank.cmp(&a.rank))
        }),
        SelectionMode::OpenToAll => candidates.shuffle(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidate(id: &str, score: f64, rank: RankTier) -> RankedCandidate {
        RankedCandidate {
            freelancer_id: id.to_string(),
            name: None,
            rank,
            eligibility: EligibilityResult {
                eligible: score > 0.0,
                match_score: score,
                matched_skills: vec![],
            },
        }
    }

    fn ids(candidates: &[RankedCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.freelancer_id.as_str()).collect()
    }

    #[test]
    fn test_best_match_sorts_by_score_descending() {
        let mut list = vec![
            candidate("a", 50.0, RankTier::Classic),
            candidate("b", 100.0, RankTier::Classic),
            candidate("c", 75.0, RankTier::Classic),
        ];
        order_candidates(&mut list, SelectionMode::BestMatch, &mut StdRng::seed_from_u64(1));
        assert_eq!(ids(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_best_match_breaks_ties_by_rank_then_input_order() {
        let mut list = vec![
            candidate("a", 50.0, RankTier::Silver),
            candidate("b", 50.0, RankTier::Diamond),
            candidate("c", 50.0, RankTier::Silver),
        ];
        order_candidates(&mut list, SelectionMode::BestMatch, &mut StdRng::seed_from_u64(1));
        assert_eq!(ids(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_scores_above_one_hundred_sort_first() {
        let mut list = vec![
            candidate("a", 100.0, RankTier::Classic),
            candidate("b", 200.0, RankTier::Classic),
        ];
        order_candidates(&mut list, SelectionMode::BestMatch, &mut StdRng::seed_from_u64(1));
        assert_eq!(ids(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_open_to_all_keeps_every_candidate() {
        let mut list: Vec<RankedCandidate> = (0..20)
            .map(|i| candidate(&i.to_string(), i as f64, RankTier::Classic))
            .collect();
        order_candidates(&mut list, SelectionMode::OpenToAll, &mut StdRng::seed_from_u64(7));
        let mut seen: Vec<String> = list.iter().map(|c| c.freelancer_id.clone()).collect();
        seen.sort_by_key(|s| s.parse::<u32>().unwrap());
        let expected: Vec<String> = (0..20).map(|i: u32| i.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_open_to_all_reorders_candidates() {
        let original: Vec<RankedCandidate> = (0..20)
            .map(|i| candidate(&i.to_string(), 100.0 - i as f64, RankTier::Classic))
            .collect();
        let mut list = original.clone();
        order_candidates(&mut list, SelectionMode::OpenToAll, &mut StdRng::seed_from_u64(42));

        assert_ne!(ids(&list), ids(&original), "open-to-all kept the input order");
        let mut sorted = ids(&list);
        sorted.sort_unstable();
        let mut expected = ids(&original);
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_open_to_all_ignores_score_order() {
        // Already best-first; a shuffle should not leave it that way.
        let mut list: Vec<RankedCandidate> = (0..20)
            .map(|i| candidate(&i.to_string(), 100.0 - i as f64, RankTier::Classic))
            .collect();
        order_candidates(&mut list, SelectionMode::OpenToAll, &mut StdRng::seed_from_u64(9));
        let descending = list
            .windows(2)
            .all(|w| w[0].eligibility.match_score >= w[1].eligibility.match_score);
        assert!(!descending);
    }

    #[test]
    fn test_selection_mode_serde() {
        let mode: SelectionMode = serde_json::from_str(r#""random""#).unwrap();
        assert_eq!(mode, SelectionMode::OpenToAll);
        let mode: SelectionMode = serde_json::from_str(r#""match""#).unwrap();
        assert_eq!(mode, SelectionMode::BestMatch);
        assert_eq!(SelectionMode::default(), SelectionMode::BestMatch);
    }

    #[test]
    fn test_ranked_candidate_flattens_eligibility() {
        let value = serde_json::to_value(candidate("x", 40.0, RankTier::Gold)).unwrap();
        assert_eq!(value["match_score"], 40.0);
        assert_eq!(value["rank"], "Gold");
        assert_eq!(value["eligible"], true);
    }
}
