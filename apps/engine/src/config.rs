use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::search::IndexOptions;

/// Which eligibility backend `AppState` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerBackend {
    Expanded,
    Literal,
}

impl FromStr for ScorerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expanded" => Ok(ScorerBackend::Expanded),
            "literal" => Ok(ScorerBackend::Literal),
            other => bail!("unknown scorer backend '{other}' (expected 'expanded' or 'literal')"),
        }
    }
}

/// Engine configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub fuzzy_threshold: f64,
    pub name_weight: f64,
    pub category_weight: f64,
    pub min_match_char_length: usize,
    pub expansion_limit: usize,
    pub scorer_backend: ScorerBackend,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            fuzzy_threshold: 0.4,
            name_weight: 0.7,
            category_weight: 0.3,
            min_match_char_length: 1,
            expansion_limit: 5,
            scorer_backend: ScorerBackend::Expanded,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let config = Config {
            catalog_path: lookup("SKILL_CATALOG_PATH").map(PathBuf::from),
            fuzzy_threshold: parse_var(&lookup, "FUZZY_THRESHOLD", defaults.fuzzy_threshold)?,
            name_weight: parse_var(&lookup, "NAME_WEIGHT", defaults.name_weight)?,
            category_weight: parse_var(&lookup, "CATEGORY_WEIGHT", defaults.category_weight)?,
            min_match_char_length: parse_var(
                &lookup,
                "MIN_MATCH_CHAR_LENGTH",
                defaults.min_match_char_length,
            )?,
            expansion_limit: parse_var(&lookup, "EXPANSION_LIMIT", defaults.expansion_limit)?,
            scorer_backend: parse_var(&lookup, "SCORER_BACKEND", defaults.scorer_backend)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            bail!(
                "FUZZY_THRESHOLD must be within [0, 1], got {}",
                self.fuzzy_threshold
            );
        }
        if !(self.name_weight > 0.0) || !(self.category_weight > 0.0) {
            bail!(
                "field weights must be positive (name={}, category={})",
                self.name_weight,
                self.category_weight
            );
        }
        Ok(())
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            threshold: self.fuzzy_threshold,
            name_weight: self.name_weight,
            category_weight: self.category_weight,
            min_match_char_length: self.min_match_char_length,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_no_vars_gives_defaults() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config.fuzzy_threshold, 0.4);
        assert_eq!(config.scorer_backend, ScorerBackend::Expanded);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = from_vars(&[
            ("SCORER_BACKEND", "literal"),
            ("FUZZY_THRESHOLD", " 0.25 "),
            ("EXPANSION_LIMIT", "3"),
            ("SKILL_CATALOG_PATH", "/srv/skills.json"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.scorer_backend, ScorerBackend::Literal);
        assert_eq!(config.fuzzy_threshold, 0.25);
        assert_eq!(config.expansion_limit, 3);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/skills.json")));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_unparsable_var_names_the_key() {
        let err = from_vars(&[("FUZZY_THRESHOLD", "abc")]).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("FUZZY_THRESHOLD"), "{message}");
        assert!(message.contains("abc"), "{message}");
    }

    #[test]
    fn test_unknown_backend_var_rejected() {
        let err = from_vars(&[("SCORER_BACKEND", "semantic")]).unwrap_err();
        assert!(format!("{err:#}").contains("SCORER_BACKEND"));
    }

    #[test]
    fn test_parsed_values_are_validated() {
        assert!(from_vars(&[("FUZZY_THRESHOLD", "2")]).is_err());
        assert!(from_vars(&[("NAME_WEIGHT", "-1")]).is_err());
    }

    #[test]
    fn test_defaults_match_search_contract() {
        let config = Config::default();
        assert_eq!(config.fuzzy_threshold, 0.4);
        assert_eq!(config.name_weight, 0.7);
        assert_eq!(config.category_weight, 0.3);
        assert_eq!(config.min_match_char_length, 1);
        assert_eq!(config.expansion_limit, 5);
        assert_eq!(config.scorer_backend, ScorerBackend::Expanded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let config = Config {
            fuzzy_threshold: 1.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_weight_rejected() {
        let config = Config {
            category_weight: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scorer_backend_parse() {
        assert_eq!(
            "Literal".parse::<ScorerBackend>().unwrap(),
            ScorerBackend::Literal
        );
        assert_eq!(
            " expanded ".parse::<ScorerBackend>().unwrap(),
            ScorerBackend::Expanded
        );
        assert!("semantic".parse::<ScorerBackend>().is_err());
    }

    #[test]
    fn test_index_options_carry_weights() {
        let opts = Config::default().index_options();
        assert_eq!(opts.threshold, 0.4);
        assert_eq!(opts.name_weight, 0.7);
        assert_eq!(opts.category_weight, 0.3);
    }
}
