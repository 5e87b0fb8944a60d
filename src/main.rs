// Detect the source language of a file or stdin.
//
// Usage: codecard [FILE]
//
// With a filename, the extension is authoritative and content scoring
// only fills the gap; with stdin (`-` or no argument) content scoring
// is all there is. Prints the language id or "unknown".

use std::io::Read;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "-".to_string());

    let (filename, code) = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        (None, buf)
    } else {
        let code =
            std::fs::read_to_string(&arg).with_context(|| format!("reading file {arg}"))?;
        (Some(arg), code)
    };

    let by_extension = filename
        .as_deref()
        .and_then(codecard::detect_language_by_extension);
    if let Some(language) = by_extension {
        log::debug!("extension fallback resolved {language}");
    }

    let language = by_extension.or_else(|| codecard::detect_language(&code));
    println!("{}", language.unwrap_or("unknown"));
    Ok(())
}
