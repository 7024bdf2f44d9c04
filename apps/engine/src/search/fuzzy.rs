//! Approximate substring matching.
//!
//! A field's distance to a pattern is the fewest edits (insert, delete,
//! substitute) that turn the pattern into *some* substring of the field,
//! divided by the pattern length. Where the substring sits in the field does
//! not matter, so "react" scores 0.0 against both "React Development" and
//! "Mobile React Native".

/// A case-folded, trimmed search pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    whole: Vec<char>,
    tokens: Vec<Vec<char>>,
}

impl Pattern {
    /// Returns `None` for blank input or input shorter than `min_len` chars.
    pub fn new(text: &str, min_len: usize) -> Option<Self> {
        let folded = fold(text.trim());
        let whole: Vec<char> = folded.chars().collect();
        if whole.is_empty() || whole.len() < min_len.max(1) {
            return None;
        }
        let tokens = folded
            .split_whitespace()
            .map(|t| t.chars().collect())
            .collect();
        Some(Pattern { whole, tokens })
    }
}

/// Lowercases a field or pattern for comparison.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Minimum edit distance between `pattern` and any substring of `text`.
pub fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    if m == 0 {
        return 0;
    }

    // prev[i]: distance of pattern[..i] to the best substring ending just
    // before the current text position. Row 0 is free: a match may start anywhere.
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];
    let mut best = m;

    for &tc in text {
        curr[0] = 0;
        for i in 1..=m {
            let substitute = prev[i - 1] + usize::from(pattern[i - 1] != tc);
            let skip_text = prev[i] + 1;
            let skip_pattern = curr[i - 1] + 1;
            curr[i] = substitute.min(skip_text).min(skip_pattern);
        }
        best = best.min(curr[m]);
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// `substring_distance` normalized by pattern length, in `[0, 1]`.
pub fn normalized_distance(pattern: &[char], text: &[char]) -> f64 {
    if pattern.is_empty() {
        return 0.0;
    }
    (substring_distance(pattern, text) as f64 / pattern.len() as f64).min(1.0)
}

/// Scores `field` (already folded) against `pattern`.
///
/// Two readings are tried: the whole pattern, and (for multi-word patterns)
/// each word on its own, averaged, which tolerates reordered words. Returns
/// the better reading if it is within `threshold`, otherwise `None`.
pub fn field_score(pattern: &Pattern, field: &[char], threshold: f64) -> Option<f64> {
    let whole = normalized_distance(&pattern.whole, field);
    let mut best = (whole <= threshold).then_some(whole);

    if pattern.tokens.len() > 1 {
        let token_scores: Vec<f64> = pattern
            .tokens
            .iter()
            .map(|token| normalized_distance(token, field))
            .collect();
        if token_scores.iter().all(|s| *s <= threshold) {
            let mean = token_scores.iter().sum::<f64>() / token_scores.len() as f64;
            best = Some(best.map_or(mean, |b| b.min(mean)));
        }
    }

    best
}
