//! Heuristic source-language detection
//!
//! A best-effort classifier, not a grammar recognizer: every language in
//! the static signature table is scored by weighted regex evidence, the
//! top scorer wins, and exact ties fall to a fixed priority order. The
//! whole path is pure and reentrant; the one observable "failure" is
//! `None`, meaning the evidence was absent or ambiguous.
//!
//! Composition with the extension fallback is caller policy: on file
//! upload [`detect_language_by_extension`] is authoritative, content
//! scoring covers freeform text entry.

pub mod errors;
pub mod extension;
pub mod resolver;
pub mod scorer;
pub mod signatures;

pub use errors::SignatureTableError;
pub use extension::{EXTENSION_MAP, detect_language_by_extension, language_for_extension};
pub use resolver::resolve;
pub use scorer::{ScoreBoard, score};
pub use signatures::{
    LANGUAGE_SIGNATURES, LanguageSignature, PRIORITY_ORDER, SignatureRule,
    validate_signature_table,
};

/// Default cap on the bytes examined per detection call.
///
/// Realistic pastes score in well under a millisecond; the cap exists so
/// a multi-megabyte paste cannot turn regex matching into a visible
/// stall. 64 KiB keeps the signatures that matter (imports and
/// declarations cluster at the top of a file) while bounding worst-case
/// cost.
pub const DEFAULT_MAX_SCAN_BYTES: usize = 64 * 1024;

/// Tuning knobs for a detection call.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    max_scan_bytes: Option<usize>,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            max_scan_bytes: Some(DEFAULT_MAX_SCAN_BYTES),
        }
    }
}

impl DetectOptions {
    /// Cap the number of bytes examined; `None` scans the full sample.
    #[must_use]
    pub fn with_max_scan_bytes(mut self, max_scan_bytes: Option<usize>) -> Self {
        self.max_scan_bytes = max_scan_bytes;
        self
    }

    /// Currently configured scan cap.
    #[must_use]
    pub fn max_scan_bytes(&self) -> Option<usize> {
        self.max_scan_bytes
    }
}

/// Detect the language of a text sample with default options.
#[must_use]
pub fn detect_language(code: &str) -> Option<&'static str> {
    detect_language_with(code, &DetectOptions::default())
}

/// Detect the language of a text sample.
///
/// Empty or whitespace-only input short-circuits to `None` before any
/// pattern runs; nothing would match anyway, this just skips the rule
/// set. Otherwise the (possibly capped) sample is scored and resolved.
#[must_use]
pub fn detect_language_with(code: &str, options: &DetectOptions) -> Option<&'static str> {
    if code.trim().is_empty() {
        return None;
    }

    let sample = match options.max_scan_bytes {
        Some(cap) => scorer::safe_prefix(code, cap),
        None => code,
    };

    let board = score(sample);
    let winner = resolve(&board);
    tracing::debug!(
        ?winner,
        max_score = board.max_score(),
        sample_bytes = sample.len(),
        "content detection completed"
    );
    winner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_inconclusive() {
        assert_eq!(detect_language(""), None);
        assert_eq!(detect_language("   \n\t  \n"), None);
    }

    #[test]
    fn default_options_carry_the_scan_cap() {
        assert_eq!(
            DetectOptions::default().max_scan_bytes(),
            Some(DEFAULT_MAX_SCAN_BYTES)
        );
        assert_eq!(
            DetectOptions::default()
                .with_max_scan_bytes(None)
                .max_scan_bytes(),
            None
        );
    }
}
