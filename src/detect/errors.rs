//! Error types for detector configuration
//!
//! Detection itself never fails: an inconclusive sample yields `None`,
//! which is a contractual signal rather than an error. The only failure
//! surface is a malformed signature table, caught once at startup.

use thiserror::Error;

/// Configuration problems in the static signature table.
///
/// Any of these means the build shipped a broken table; they surface at
/// initialization, never per detection call.
#[derive(Debug, Error)]
pub enum SignatureTableError {
    /// Two table entries share a language id
    #[error("duplicate language id in signature table: {0}")]
    DuplicateLanguage(String),

    /// A rule carries weight 0, which could never contribute evidence
    #[error("zero-weight rule for language '{language}': {pattern}")]
    ZeroWeight { language: String, pattern: String },

    /// A rule's pattern failed to compile
    #[error("invalid pattern for language '{language}' ({pattern}): {message}")]
    InvalidPattern {
        language: String,
        pattern: String,
        message: String,
    },

    /// The tie-break list is empty
    #[error("priority order is empty")]
    EmptyPriorityOrder,

    /// The tie-break list names a language missing from the table
    #[error("priority order entry '{0}' has no signature table entry")]
    UnknownPriorityLanguage(String),
}
