//! Short link identifiers
//!
//! Share links use 8-character ids drawn from the url-safe nanoid
//! alphabet. Generation lives here so server-side embedders and tests
//! mint ids the same way the hosted service does; the format check runs
//! client-side before any request leaves the process.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

/// Length of a short link id.
pub const SHORT_ID_LEN: usize = 8;

/// url-safe nanoid alphabet.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

static SHORT_ID_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{8}$").expect("short id format regex"));

/// Mint a random short id.
#[must_use]
pub fn generate_short_id() -> String {
    let mut rng = rand::rng();
    (0..SHORT_ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Check whether a string has the short id shape.
#[must_use]
pub fn is_valid_short_id(id: &str) -> bool {
    SHORT_ID_FORMAT.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_validate() {
        for _ in 0..64 {
            let id = generate_short_id();
            assert_eq!(id.len(), SHORT_ID_LEN);
            assert!(is_valid_short_id(&id), "generated id {id:?} failed format");
        }
    }

    #[test]
    fn format_rejects_wrong_shapes() {
        assert!(is_valid_short_id("Ab3dEf9_"));
        assert!(is_valid_short_id("aaaa-aaa"));
        assert!(!is_valid_short_id("short"));
        assert!(!is_valid_short_id("far-too-long"));
        assert!(!is_valid_short_id("bad.char"));
        assert!(!is_valid_short_id(""));
    }
}
