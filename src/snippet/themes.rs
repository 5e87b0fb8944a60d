//! Preset card themes

use super::{CodeTheme, WindowStyle};

/// Syntax theme applied when a preset does not name a closer match.
pub const DEFAULT_SYNTAX_THEME: &str = "github-dark";

fn theme(name: &str, background: &str, window_style: WindowStyle, syntax_theme: &str) -> CodeTheme {
    CodeTheme {
        name: name.to_string(),
        background: background.to_string(),
        window_style,
        syntax_theme: syntax_theme.to_string(),
    }
}

/// The theme new cards start with.
#[must_use]
pub fn default_theme() -> CodeTheme {
    theme(
        "GitHub Dark",
        "linear-gradient(135deg, #0d1117 0%, #161b22 100%)",
        WindowStyle::Macos,
        "github-dark",
    )
}

/// Built-in theme presets offered by the configurator.
#[must_use]
pub fn preset_themes() -> Vec<CodeTheme> {
    vec![
        default_theme(),
        theme(
            "GitHub Light",
            "linear-gradient(135deg, #ffffff 0%, #f6f8fa 100%)",
            WindowStyle::Macos,
            "github-light",
        ),
        theme(
            "VS Code Dark",
            "linear-gradient(135deg, #1e1e1e 0%, #2d2d30 100%)",
            WindowStyle::Macos,
            "vs-dark",
        ),
        theme(
            "Dracula",
            "linear-gradient(135deg, #282a36 0%, #44475a 100%)",
            WindowStyle::Macos,
            "dracula",
        ),
        theme(
            "One Dark",
            "linear-gradient(135deg, #282c34 0%, #3e4451 100%)",
            WindowStyle::Macos,
            "one-dark",
        ),
        theme(
            "Monokai",
            "linear-gradient(135deg, #272822 0%, #3e3d32 100%)",
            WindowStyle::Macos,
            "monokai",
        ),
        theme(
            "Nord",
            "linear-gradient(135deg, #2e3440 0%, #3b4252 100%)",
            WindowStyle::Macos,
            "vs-dark",
        ),
        theme(
            "Tokyo Night",
            "linear-gradient(135deg, #1a1b26 0%, #24283b 100%)",
            WindowStyle::Macos,
            "vs-dark",
        ),
        theme(
            "Synthwave '84",
            "linear-gradient(135deg, #2b213a 0%, #262335 100%)",
            WindowStyle::Macos,
            "vs-dark",
        ),
        theme(
            "Terminal",
            "linear-gradient(135deg, #000000 0%, #1a1a1a 100%)",
            WindowStyle::Terminal,
            "vs-dark",
        ),
    ]
}
