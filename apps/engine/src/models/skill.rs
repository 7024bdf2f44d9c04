use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One entry of the skill taxonomy. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: u32,
    pub name: String,
    pub category: String,
}

/// A catalog record paired with its combined fuzzy distance (0.0 = perfect).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub skill: SkillRecord,
    pub score: f64,
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub limit: usize,
}

impl SearchQuery {
    /// Builds a query from a caller-supplied signed limit. Negative limits are
    /// rejected; zero is valid and yields no results.
    pub fn new(text: impl Into<String>, limit: i64) -> Result<Self, AppError> {
        Ok(SearchQuery {
            text: text.into(),
            limit: validate_limit(limit)?,
        })
    }
}

/// Converts a caller-supplied signed limit, rejecting negatives.
pub fn validate_limit(limit: i64) -> Result<usize, AppError> {
    usize::try_from(limit).map_err(|_| AppError::InvalidLimit(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_limit_rejected() {
        let err = SearchQuery::new("react", -1).unwrap_err();
        assert!(matches!(err, AppError::InvalidLimit(-1)));
    }

    #[test]
    fn test_zero_limit_accepted() {
        let query = SearchQuery::new("react", 0).unwrap();
        assert_eq!(query.limit, 0);
    }

    #[test]
    fn test_skill_record_deserializes() {
        let json = r#"{"id": 17, "name": "React Development", "category": "Web Development"}"#;
        let record: SkillRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 17);
        assert_eq!(record.name, "React Development");
        assert_eq!(record.category, "Web Development");
    }
}
