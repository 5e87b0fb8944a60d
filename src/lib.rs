//! codecard: core library for shareable code-screenshot cards.
//!
//! Three concerns live here: heuristic source-language detection
//! (weighted regex signatures with deterministic tie-breaking and an
//! extension fallback), the snippet/theme/settings model the card
//! composer renders, and the client for the hosted short-link service.

pub mod detect;
pub mod share;
pub mod snippet;

pub use detect::{
    DEFAULT_MAX_SCAN_BYTES, DetectOptions, ScoreBoard, SignatureTableError, detect_language,
    detect_language_by_extension, detect_language_with, resolve, score, validate_signature_table,
};
pub use share::{
    CreatedShare, ShareClient, ShareError, ShareResult, SharedSnippet, generate_short_id,
    is_valid_short_id,
};
pub use snippet::{
    CodeSettings, CodeSnippet, CodeTheme, DEFAULT_DISPLAY_LANGUAGE, SUPPORTED_LANGUAGES,
    WindowStyle, default_theme, display_language, preset_themes, supported_language,
};
