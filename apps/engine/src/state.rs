use std::sync::Arc;

use tracing::info;

use crate::catalog::SkillCatalog;
use crate::config::{Config, ScorerBackend};
use crate::errors::AppError;
use crate::matching::{EligibilityScorer, ExpandedSkillScorer, LiteralSkillScorer, SkillExpander};
use crate::search::SkillIndex;

/// Shared engine state handed to every request handler.
/// Built once at startup; nothing in it is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<SkillIndex>,
    pub expander: SkillExpander,
    /// Pluggable eligibility scorer. Default: ExpandedSkillScorer. Swap via SCORER_BACKEND.
    pub scorer: Arc<dyn EligibilityScorer>,
}

impl AppState {
    /// Loads the configured catalog and builds the index and scorer.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let catalog = SkillCatalog::load(config.catalog_path.as_deref())?;
        Ok(Self::new(catalog, config))
    }

    pub fn new(catalog: SkillCatalog, config: &Config) -> Self {
        let index = Arc::new(SkillIndex::new(catalog, config.index_options()));
        let expander = SkillExpander::with_limit(index.clone(), config.expansion_limit);

        let scorer: Arc<dyn EligibilityScorer> = match config.scorer_backend {
            ScorerBackend::Expanded => Arc::new(ExpandedSkillScorer::new(expander.clone())),
            ScorerBackend::Literal => Arc::new(LiteralSkillScorer),
        };
        info!("Eligibility scorer backend: {}", scorer.backend());

        AppState {
            index,
            expander,
            scorer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtin_catalog_and_expanded_scorer() {
        let state = AppState::from_config(&Config::default()).unwrap();
        assert!(!state.index.is_empty());
        assert_eq!(state.scorer.backend(), "expanded");
    }

    #[test]
    fn test_literal_backend_selected_by_config() {
        let config = Config {
            scorer_backend: ScorerBackend::Literal,
            ..Config::default()
        };
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.scorer.backend(), "literal");
    }

    #[test]
    fn test_missing_catalog_file_fails() {
        let config = Config {
            catalog_path: Some("/nonexistent/skills.json".into()),
            ..Config::default()
        };
        assert!(AppState::from_config(&config).is_err());
    }

    #[test]
    fn test_state_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
