use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, info};

use crate::catalog::SkillCatalog;
use crate::models::{SearchResult, SkillRecord};
use crate::search::fuzzy::{self, Pattern};

/// Tuning knobs for the index. Defaults: threshold 0.4, name 0.7, category 0.3.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexOptions {
    /// Worst normalized distance a field may have and still count as a match.
    pub threshold: f64,
    pub name_weight: f64,
    pub category_weight: f64,
    /// Patterns shorter than this never match.
    pub min_match_char_length: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            name_weight: 0.7,
            category_weight: 0.3,
            min_match_char_length: 1,
        }
    }
}

#[derive(Debug)]
struct IndexedRecord {
    record: SkillRecord,
    name: Vec<char>,
    category: Vec<char>,
}

/// Prebuilt, read-only fuzzy index over a skill catalog.
///
/// Built once at startup and shared (`Arc<SkillIndex>`) by every caller;
/// nothing mutates it after construction.
#[derive(Debug)]
pub struct SkillIndex {
    entries: Vec<IndexedRecord>,
    by_id: HashMap<u32, usize>,
    by_category: HashMap<String, Vec<usize>>,
    categories: BTreeSet<String>,
    options: IndexOptions,
}

impl SkillIndex {
    pub fn new(catalog: SkillCatalog, options: IndexOptions) -> Self {
        let records = catalog.records().to_vec();
        let mut entries = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut categories = BTreeSet::new();

        for (pos, record) in records.into_iter().enumerate() {
            by_id.insert(record.id, pos);
            by_category
                .entry(fuzzy::fold(&record.category))
                .or_default()
                .push(pos);
            categories.insert(record.category.clone());
            entries.push(IndexedRecord {
                name: fuzzy::fold(&record.name).chars().collect(),
                category: fuzzy::fold(&record.category).chars().collect(),
                record,
            });
        }

        info!(
            "Built skill index: {} records across {} categories (threshold {})",
            entries.len(),
            categories.len(),
            options.threshold
        );

        SkillIndex {
            entries,
            by_id,
            by_category,
            categories,
            options,
        }
    }

    pub fn with_defaults(catalog: SkillCatalog) -> Self {
        Self::new(catalog, IndexOptions::default())
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best-first catalog records matching `query`, at most `limit` of them.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SkillRecord> {
        self.search_with_score(query, limit)
            .into_iter()
            .map(|r| r.skill)
            .collect()
    }

    /// Same as [`search`](Self::search) but keeps each combined score.
    ///
    /// Every record is scored; the list is then stably sorted ascending so
    /// equal scores keep catalog order, and cut to `limit`.
    pub fn search_with_score(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(pattern) = Pattern::new(query, self.options.min_match_char_length) else {
            return Vec::new();
        };

        let mut hits: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(pos, entry)| self.score_entry(&pattern, entry).map(|s| (pos, s)))
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        let total = hits.len();
        hits.truncate(limit);

        debug!(
            query,
            limit,
            candidates = total,
            returned = hits.len(),
            "fuzzy search"
        );

        hits.into_iter()
            .map(|(pos, score)| SearchResult {
                skill: self.entries[pos].record.clone(),
                score,
            })
            .collect()
    }

    /// Weighted combination of both fields. A field that did not match
    /// contributes the threshold, so the result never exceeds it.
    fn score_entry(&self, pattern: &Pattern, entry: &IndexedRecord) -> Option<f64> {
        let threshold = self.options.threshold;
        let name = fuzzy::field_score(pattern, &entry.name, threshold);
        let category = fuzzy::field_score(pattern, &entry.category, threshold);

        if name.is_none() && category.is_none() {
            return None;
        }

        let wn = self.options.name_weight;
        let wc = self.options.category_weight;
        let combined =
            (wn * name.unwrap_or(threshold) + wc * category.unwrap_or(threshold)) / (wn + wc);
        Some(combined.clamp(0.0, threshold))
    }

    /// Records whose category equals `category`, ignoring case, in catalog order.
    pub fn get_by_category(&self, category: &str) -> Vec<SkillRecord> {
        self.by_category
            .get(&fuzzy::fold(category))
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| self.entries[pos].record.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn all_categories(&self) -> BTreeSet<String> {
        self.categories.clone()
    }

    pub fn get_by_id(&self, id: u32) -> Option<&SkillRecord> {
        self.by_id.get(&id).map(|&pos| &self.entries[pos].record)
    }

    /// Union of per-keyword searches, deduplicated, in first-seen order.
    pub fn recommend(&self, keywords: &[String], limit_per_keyword: usize) -> Vec<SkillRecord> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for keyword in keywords {
            for record in self.search(keyword, limit_per_keyword) {
                if seen.insert(record.id) {
                    out.push(record);
                }
            }
        }

        debug!(
            keywords = keywords.len(),
            recommended = out.len(),
            "skill recommendation"
        );
        out
    }
}
