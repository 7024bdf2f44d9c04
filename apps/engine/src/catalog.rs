//! Skill catalog — the fixed, ordered taxonomy every search runs against.
//!
//! The built-in taxonomy is embedded at compile time from
//! `data/skill_catalog.json`; deployments may point `SKILL_CATALOG_PATH` at a
//! replacement file with the same shape. Catalog order is significant: it is
//! the tie-break order for equal search scores.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::SkillRecord;

const BUILTIN_CATALOG: &str = include_str!("../data/skill_catalog.json");

/// Validated, immutable list of skill records.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    records: Vec<SkillRecord>,
}

impl SkillCatalog {
    /// Validates and wraps a record list.
    ///
    /// Rejects duplicate ids, duplicate names (case-insensitive) and blank
    /// names or categories.
    pub fn new(records: Vec<SkillRecord>) -> Result<Self, AppError> {
        let mut ids = HashSet::with_capacity(records.len());
        let mut names = HashSet::with_capacity(records.len());

        for record in &records {
            if record.name.trim().is_empty() {
                return Err(AppError::Catalog(format!("skill {} has a blank name", record.id)));
            }
            if record.category.trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "skill {} ('{}') has a blank category",
                    record.id, record.name
                )));
            }
            if !ids.insert(record.id) {
                return Err(AppError::Catalog(format!("duplicate skill id {}", record.id)));
            }
            if !names.insert(record.name.to_lowercase()) {
                return Err(AppError::Catalog(format!(
                    "duplicate skill name '{}'",
                    record.name
                )));
            }
        }

        Ok(SkillCatalog { records })
    }

    /// The taxonomy shipped with the engine.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let records: Vec<SkillRecord> = serde_json::from_str(json)
            .map_err(|e| AppError::Catalog(format!("catalog is not valid JSON: {e}")))?;
        Self::new(records)
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        info!(
            "Loaded {} skill records from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Loads from `path` when given, otherwise falls back to the built-in set.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }

    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
