//! Extension-based language fallback
//!
//! A plain suffix lookup, independent of the signature table. The
//! surrounding application treats a filename's extension as stronger
//! evidence than content heuristics, so this is consulted first on file
//! upload and the content path only fills the gap.

/// Lowercase extension (no dot) to language id.
pub const EXTENSION_MAP: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("cxx", "cpp"),
    ("cc", "cpp"),
    ("c", "c"),
    ("cs", "csharp"),
    ("php", "php"),
    ("rb", "ruby"),
    ("go", "go"),
    ("rs", "rust"),
    ("swift", "swift"),
    ("kt", "kotlin"),
    ("html", "html"),
    ("htm", "html"),
    ("css", "css"),
    ("scss", "scss"),
    ("sass", "scss"),
    ("json", "json"),
    ("yml", "yaml"),
    ("yaml", "yaml"),
    ("md", "markdown"),
    ("sql", "sql"),
    ("sh", "bash"),
    ("bash", "bash"),
    ("zsh", "bash"),
];

/// Look up a bare extension (without the dot), case-insensitively.
#[must_use]
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    let extension = extension.to_ascii_lowercase();
    EXTENSION_MAP
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}

/// Map a filename to a language id using only its suffix.
///
/// Takes the substring after the last `.`; filenames without a dot or
/// with an unmapped extension yield `None`. Total, never panics.
#[must_use]
pub fn detect_language_by_extension(filename: &str) -> Option<&'static str> {
    let (_, extension) = filename.rsplit_once('.')?;
    language_for_extension(extension)
}
