use std::fmt;

use serde::{Deserialize, Serialize};

/// Freelancer reputation tier, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankTier {
    Classic,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

/// Lower bound of each tier, highest first. First band that fits wins.
const TIER_BANDS: &[(u32, RankTier)] = &[
    (50, RankTier::Diamond),
    (30, RankTier::Platinum),
    (15, RankTier::Gold),
    (5, RankTier::Silver),
];

impl RankTier {
    pub fn from_projects(projects_completed: u32) -> Self {
        TIER_BANDS
            .iter()
            .find(|(min, _)| projects_completed >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(RankTier::Classic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankTier::Classic => "Classic",
            RankTier::Silver => "Silver",
            RankTier::Gold => "Gold",
            RankTier::Platinum => "Platinum",
            RankTier::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
