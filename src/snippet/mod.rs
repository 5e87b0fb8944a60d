//! Snippet, theme and settings model
//!
//! The typed shapes the card composer renders and the share service
//! stores. Serialization follows the application wire format: camelCase
//! payload fields, lowercase window styles.

pub mod themes;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use themes::{DEFAULT_SYNTAX_THEME, default_theme, preset_themes};

/// Simulated window chrome drawn around the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStyle {
    Macos,
    Windows,
    Terminal,
    Safari,
    Iphone,
}

/// Visual theme for a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeTheme {
    pub name: String,
    /// CSS background (usually a gradient) behind the window.
    pub background: String,
    pub window_style: WindowStyle,
    pub syntax_theme: String,
}

impl Default for CodeTheme {
    fn default() -> Self {
        default_theme()
    }
}

/// Rendering settings for a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSettings {
    pub font_size: u32,
    pub font_family: String,
    pub line_numbers: bool,
    pub padding: u32,
    pub border_radius: u32,
    pub show_header: bool,
    pub show_footer: bool,
    pub watermark: bool,
}

impl Default for CodeSettings {
    fn default() -> Self {
        Self {
            font_size: 14,
            font_family: "Fira Code, Monaco, Consolas, monospace".to_string(),
            line_numbers: true,
            padding: 32,
            border_radius: 12,
            show_header: true,
            show_footer: false,
            watermark: true,
        }
    }
}

/// A composed code card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub id: String,
    pub code: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub theme: CodeTheme,
    pub settings: CodeSettings,
}

/// One entry in the display-language catalog.
#[derive(Debug, Clone, Copy)]
pub struct SupportedLanguage {
    pub id: &'static str,
    pub label: &'static str,
    /// Canonical extension offered when downloading the snippet.
    pub extension: &'static str,
}

/// Display language used when a detector result is missing or unknown.
pub const DEFAULT_DISPLAY_LANGUAGE: &str = "javascript";

/// Fixed catalog of languages the highlighter can render.
pub const SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage { id: "javascript", label: "JavaScript", extension: "js" },
    SupportedLanguage { id: "typescript", label: "TypeScript", extension: "ts" },
    SupportedLanguage { id: "python", label: "Python", extension: "py" },
    SupportedLanguage { id: "java", label: "Java", extension: "java" },
    SupportedLanguage { id: "cpp", label: "C++", extension: "cpp" },
    SupportedLanguage { id: "c", label: "C", extension: "c" },
    SupportedLanguage { id: "csharp", label: "C#", extension: "cs" },
    SupportedLanguage { id: "php", label: "PHP", extension: "php" },
    SupportedLanguage { id: "ruby", label: "Ruby", extension: "rb" },
    SupportedLanguage { id: "go", label: "Go", extension: "go" },
    SupportedLanguage { id: "rust", label: "Rust", extension: "rs" },
    SupportedLanguage { id: "swift", label: "Swift", extension: "swift" },
    SupportedLanguage { id: "kotlin", label: "Kotlin", extension: "kt" },
    SupportedLanguage { id: "html", label: "HTML", extension: "html" },
    SupportedLanguage { id: "css", label: "CSS", extension: "css" },
    SupportedLanguage { id: "scss", label: "SCSS", extension: "scss" },
    SupportedLanguage { id: "json", label: "JSON", extension: "json" },
    SupportedLanguage { id: "yaml", label: "YAML", extension: "yml" },
    SupportedLanguage { id: "markdown", label: "Markdown", extension: "md" },
    SupportedLanguage { id: "sql", label: "SQL", extension: "sql" },
    SupportedLanguage { id: "bash", label: "Bash", extension: "sh" },
];

/// Catalog entry for a language id, if it is renderable.
#[must_use]
pub fn supported_language(id: &str) -> Option<&'static SupportedLanguage> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.id == id)
}

/// Resolve a detection result to a renderable display language.
///
/// Ids outside the catalog (and `None` results) fall back to
/// [`DEFAULT_DISPLAY_LANGUAGE`] instead of propagating an error; the
/// highlighter always gets something it can render.
#[must_use]
pub fn display_language(detected: Option<&str>) -> &'static str {
    detected
        .and_then(supported_language)
        .map_or(DEFAULT_DISPLAY_LANGUAGE, |l| l.id)
}
