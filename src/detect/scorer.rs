//! Weighted scoring of a text sample against the signature table
//!
//! Patterns are pre-compiled once behind a `Lazy`: a `RegexSet` per
//! language answers "which rules matched at all" in a single pass, and
//! the individual `Regex` values count non-overlapping matches only for
//! the rules the set flagged. Each matching rule contributes
//! `weight x match_count`; rules never suppress each other, so
//! overlapping evidence for several languages is expected and left for
//! the resolver to settle.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::signatures::{LANGUAGE_SIGNATURES, LanguageSignature, validate_signature_table};

/// Per-call score accumulator, one entry per table language.
///
/// Entries follow signature-table iteration order, zeros included.
/// Scores are non-negative; nothing a rule does can subtract evidence.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    entries: Vec<(&'static str, u64)>,
}

impl ScoreBoard {
    /// Build a board from explicit entries.
    ///
    /// The scorer produces boards internally; this constructor exists so
    /// callers can feed the resolver synthetic boards (and so tests can
    /// pin down tie-break behavior without crafting matching inputs).
    #[must_use]
    pub fn from_entries(entries: Vec<(&'static str, u64)>) -> Self {
        Self { entries }
    }

    /// All `(language, score)` pairs in table iteration order.
    #[must_use]
    pub fn entries(&self) -> &[(&'static str, u64)] {
        &self.entries
    }

    /// Score for one language, if it is on the board.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(id, _)| *id == language)
            .map(|(_, score)| *score)
    }

    /// Highest score on the board (0 for an empty board).
    #[must_use]
    pub fn max_score(&self) -> u64 {
        self.entries
            .iter()
            .map(|(_, score)| *score)
            .max()
            .unwrap_or(0)
    }

    /// True when the board carries no evidence at all.
    #[must_use]
    pub fn is_inconclusive(&self) -> bool {
        self.max_score() == 0
    }
}

/// One language's rules, compiled for matching.
struct CompiledSignature {
    id: &'static str,
    rule_set: RegexSet,
    rules: Vec<Regex>,
    weights: Vec<u64>,
}

impl CompiledSignature {
    fn compile(language: &LanguageSignature) -> Self {
        let patterns: Vec<&str> = language.rules.iter().map(|r| r.pattern).collect();
        // Individual compilation happened during table validation, so
        // these cannot fail here.
        Self {
            id: language.id,
            rule_set: RegexSet::new(&patterns)
                .unwrap_or_else(|e| panic!("signature set for {}: {e}", language.id)),
            rules: patterns
                .iter()
                .map(|p| {
                    Regex::new(p).unwrap_or_else(|e| panic!("signature for {}: {e}", language.id))
                })
                .collect(),
            weights: language.rules.iter().map(|r| u64::from(r.weight)).collect(),
        }
    }

    fn score(&self, code: &str) -> u64 {
        self.rule_set
            .matches(code)
            .iter()
            .map(|i| self.weights[i] * self.rules[i].find_iter(code).count() as u64)
            .sum()
    }
}

/// Compiled once at first detection; table problems are fatal here.
static COMPILED: Lazy<Vec<CompiledSignature>> = Lazy::new(|| {
    validate_signature_table().expect("language signature table failed startup validation");
    LANGUAGE_SIGNATURES
        .iter()
        .map(CompiledSignature::compile)
        .collect()
});

/// Score a text sample against every language in the table.
///
/// Pure function of its input and the static table: no side effects, no
/// shared state between calls, safe to invoke concurrently. Empty text
/// yields an all-zero board.
#[must_use]
pub fn score(code: &str) -> ScoreBoard {
    ScoreBoard {
        entries: COMPILED
            .iter()
            .map(|language| (language.id, language.score(code)))
            .collect(),
    }
}

/// Largest prefix of `s` at most `max_bytes` long that ends on a UTF-8
/// character boundary. Keeps the scan cap from slicing mid-character.
pub(crate) fn safe_prefix(s: &str, max_bytes: usize) -> &str {
    if max_bytes >= s.len() {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero_everywhere() {
        let board = score("");
        assert_eq!(board.entries().len(), LANGUAGE_SIGNATURES.len());
        assert!(board.is_inconclusive());
    }

    #[test]
    fn board_includes_non_matching_languages() {
        let board = score("def greet():\n    pass\n");
        assert!(board.get("python").unwrap() > 0);
        // Zero-score languages still get entries.
        assert_eq!(board.get("go"), Some(0));
    }

    #[test]
    fn repeated_matches_multiply_weight() {
        let once = score("SELECT id FROM users;\n");
        let twice = score("SELECT id FROM users;\nSELECT name FROM users;\n");
        assert!(twice.get("sql").unwrap() > once.get("sql").unwrap());
    }

    #[test]
    fn safe_prefix_respects_char_boundaries() {
        let s = "héllo"; // 'é' spans bytes 1..3
        assert_eq!(safe_prefix(s, 2), "h");
        assert_eq!(safe_prefix(s, 3), "hé");
        assert_eq!(safe_prefix(s, 100), s);
        assert_eq!(safe_prefix(s, 0), "");
    }
}
