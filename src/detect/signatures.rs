//! Static language signature data
//!
//! Each supported language carries an ordered list of weighted regex
//! signatures. Weights reflect how distinctive a pattern is: a full
//! class-with-visibility declaration says far more about the source
//! language than a bare brace, so it must be able to outweigh several
//! generic tokens matching a competing language.
//!
//! The table is process-wide static configuration. It is validated once
//! (unique ids, positive weights, compilable patterns, priority entries
//! present in the table) and never mutated at runtime.

use std::collections::HashSet;

use super::errors::SignatureTableError;

/// One piece of evidence for a language.
///
/// `weight` is strictly positive; a pattern that never matches
/// contributes nothing to the score, never a penalty.
#[derive(Debug, Clone, Copy)]
pub struct SignatureRule {
    pub weight: u32,
    pub pattern: &'static str,
}

/// Complete signature set for one language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSignature {
    pub id: &'static str,
    pub rules: &'static [SignatureRule],
}

/// Tie-break order for languages with equal top scores.
///
/// Scanned front to back; the first entry present in the tie set wins.
/// Languages not listed here are lowest priority.
pub const PRIORITY_ORDER: &[&str] = &[
    "java", // ahead of typescript/csharp: shared class syntax
    "typescript", // ahead of javascript
    "cpp",  // ahead of c
    "python",
    "csharp",
    "javascript",
    "c",
    "go",
    "rust",
    "kotlin",
    "swift",
    "php",
    "ruby",
    "bash",
    "sql",
    "html",
    "css",
    "scss",
    "json",
    "yaml",
    "markdown",
];

/// The full signature table, one entry per detectable language.
pub const LANGUAGE_SIGNATURES: &[LanguageSignature] = &[
    LanguageSignature {
        id: "java",
        rules: &[
            SignatureRule { weight: 10, pattern: r"\b(public|private|protected)\s+(static\s+)?(class|interface|enum)\s+\w+" },
            SignatureRule { weight: 8, pattern: r"\b(import\s+java\.|package\s+[a-z.]+;)" },
            SignatureRule { weight: 8, pattern: r"\bSystem\.(out|err)\.(println|print)" },
            SignatureRule { weight: 6, pattern: r"\b(public|private|protected)\s+(static\s+)?\w+\s+\w+\s*\([^)]*\)\s*\{" },
            SignatureRule { weight: 5, pattern: r"\b(extends|implements)\s+\w+" },
            SignatureRule { weight: 4, pattern: r"\b(ArrayList|HashMap|List|Map|Set)<\w+>" },
            SignatureRule { weight: 3, pattern: r"\bnew\s+\w+<[^>]+>\(" },
            SignatureRule { weight: 2, pattern: r"\b(String|Integer|Boolean|Long|Double)\s+\w+\s*=" },
            SignatureRule { weight: 2, pattern: r"@Override|@Deprecated|@SuppressWarnings" },
        ],
    },
    LanguageSignature {
        id: "typescript",
        rules: &[
            SignatureRule { weight: 10, pattern: r"\b(interface|type)\s+\w+\s*=?\s*\{" },
            SignatureRule { weight: 8, pattern: r":\s*(string|number|boolean|any|void|unknown|never)\b" },
            SignatureRule { weight: 6, pattern: r"\b(const|let|var)\s+\w+:\s*\w+" },
            SignatureRule { weight: 5, pattern: r"\b(export|import)\s+(type|interface)\b" },
            SignatureRule { weight: 4, pattern: r"<\w+>\s*\(" },
            SignatureRule { weight: 3, pattern: r"\b(readonly|namespace|declare)\b" },
            SignatureRule { weight: 2, pattern: r"\bas\s+(const|\w+)\b" },
        ],
    },
    LanguageSignature {
        id: "javascript",
        rules: &[
            SignatureRule { weight: 6, pattern: r"\b(const|let|var)\s+\w+\s*=" },
            SignatureRule { weight: 5, pattern: r"\b(function|=>)" },
            SignatureRule { weight: 4, pattern: r"\bconsole\.(log|error|warn)" },
            SignatureRule { weight: 3, pattern: r"\b(async|await|Promise)\b" },
            SignatureRule { weight: 3, pattern: r"\b(import|export|require)\b" },
            SignatureRule { weight: 2, pattern: r"\$\{.*\}" },
        ],
    },
    LanguageSignature {
        id: "python",
        rules: &[
            SignatureRule { weight: 8, pattern: r"\bdef\s+\w+\s*\([^)]*\)\s*:" },
            SignatureRule { weight: 6, pattern: r"\b(import|from)\s+\w+" },
            SignatureRule { weight: 5, pattern: r#"\bif\s+__name__\s*==\s*["']__main__["']"# },
            SignatureRule { weight: 4, pattern: r"\b(print|len|range|str|int|float|list|dict|tuple)\s*\(" },
            SignatureRule { weight: 3, pattern: r"(?m)#.*$" },
            SignatureRule { weight: 2, pattern: r"(?m):\s*$" },
        ],
    },
    LanguageSignature {
        id: "cpp",
        rules: &[
            SignatureRule { weight: 10, pattern: r"#include\s*<(iostream|vector|string|algorithm)>" },
            SignatureRule { weight: 8, pattern: r"\busing\s+namespace\s+std;" },
            SignatureRule { weight: 6, pattern: r"\bstd::(cout|cin|endl|vector|string)" },
            SignatureRule { weight: 4, pattern: r"\b(template|typename)\s*<" },
            SignatureRule { weight: 3, pattern: r"\bint\s+main\s*\(" },
        ],
    },
    LanguageSignature {
        id: "c",
        rules: &[
            SignatureRule { weight: 10, pattern: r"#include\s*<(stdio|stdlib|string)\.h>" },
            SignatureRule { weight: 6, pattern: r"\b(printf|scanf|malloc|free|sizeof)\s*\(" },
            SignatureRule { weight: 4, pattern: r"\bint\s+main\s*\(" },
            SignatureRule { weight: 2, pattern: r"\*.*\*" },
        ],
    },
    LanguageSignature {
        id: "csharp",
        rules: &[
            SignatureRule { weight: 10, pattern: r"\busing\s+System" },
            SignatureRule { weight: 8, pattern: r"\bConsole\.(WriteLine|ReadLine)" },
            SignatureRule { weight: 6, pattern: r"\bnamespace\s+\w+" },
            SignatureRule { weight: 4, pattern: r"\[\w+\]" },
            SignatureRule { weight: 3, pattern: r"\b(public|private|protected)\s+(static\s+)?void\s+Main" },
        ],
    },
    LanguageSignature {
        id: "php",
        rules: &[
            SignatureRule { weight: 10, pattern: r"<\?php" },
            SignatureRule { weight: 6, pattern: r"\$[a-zA-Z_]\w*" },
            SignatureRule { weight: 4, pattern: r"\b(echo|print|function|class)\b" },
            SignatureRule { weight: 3, pattern: r"->\w+" },
        ],
    },
    LanguageSignature {
        id: "ruby",
        rules: &[
            SignatureRule { weight: 8, pattern: r"\b(def|end)\b" },
            SignatureRule { weight: 6, pattern: r"@[a-zA-Z_]\w*" },
            SignatureRule { weight: 4, pattern: r"\b(puts|require|module|attr_accessor)\b" },
            SignatureRule { weight: 2, pattern: r"\|\w+\|" },
        ],
    },
    LanguageSignature {
        id: "go",
        rules: &[
            SignatureRule { weight: 10, pattern: r"\bpackage\s+\w+" },
            SignatureRule { weight: 8, pattern: r"\bfunc\s+\w+\s*\([^)]*\)" },
            SignatureRule { weight: 6, pattern: r"\bfmt\.(Println|Printf)" },
            SignatureRule { weight: 4, pattern: r":=" },
            SignatureRule { weight: 3, pattern: r"\b(make|chan|go|defer)\b" },
        ],
    },
    LanguageSignature {
        id: "rust",
        rules: &[
            SignatureRule { weight: 10, pattern: r"\bfn\s+\w+\s*\([^)]*\)" },
            SignatureRule { weight: 8, pattern: r"\b(let\s+mut|impl|trait)\b" },
            SignatureRule { weight: 6, pattern: r"\b(println!|vec!|macro_rules!)" },
            SignatureRule { weight: 4, pattern: r"\b(Some|None|Ok|Err)\b" },
            SignatureRule { weight: 3, pattern: r"\b(pub|use|mod|crate)\b" },
        ],
    },
    LanguageSignature {
        id: "swift",
        rules: &[
            SignatureRule { weight: 8, pattern: r"\bfunc\s+\w+\s*\([^)]*\)\s*->" },
            SignatureRule { weight: 6, pattern: r"\b(var|let)\s+\w+:\s*\w+" },
            SignatureRule { weight: 4, pattern: r"\b(import\s+\w+|override|protocol)\b" },
            SignatureRule { weight: 3, pattern: r"\bprint\s*\(" },
        ],
    },
    LanguageSignature {
        id: "kotlin",
        rules: &[
            SignatureRule { weight: 10, pattern: r"\bfun\s+\w+\s*\(" },
            SignatureRule { weight: 8, pattern: r"\b(val|var)\s+\w+:\s*\w+" },
            SignatureRule { weight: 6, pattern: r"\b(object|companion\s+object)\b" },
            SignatureRule { weight: 4, pattern: r"\bprintln\s*\(" },
            SignatureRule { weight: 3, pattern: r"\b(open|abstract|sealed)\s+class\b" },
        ],
    },
    LanguageSignature {
        id: "html",
        rules: &[
            SignatureRule { weight: 10, pattern: r"(?i)<!DOCTYPE html>" },
            SignatureRule { weight: 8, pattern: r"<(html|head|body|div|span|p|h[1-6])" },
            SignatureRule { weight: 4, pattern: r"</?[a-zA-Z][^>]*>" },
            SignatureRule { weight: 2, pattern: r"\b(class|id)=" },
        ],
    },
    LanguageSignature {
        id: "css",
        rules: &[
            SignatureRule { weight: 8, pattern: r"[.#][a-zA-Z_-][^{]*\{[^}]*\}" },
            SignatureRule { weight: 6, pattern: r"\b(color|background|margin|padding|font-size|display)\s*:" },
            SignatureRule { weight: 4, pattern: r"@(media|import|keyframes)" },
        ],
    },
    LanguageSignature {
        id: "scss",
        rules: &[
            SignatureRule { weight: 10, pattern: r"\$[a-zA-Z_-]+:\s*[^;]+;" },
            SignatureRule { weight: 8, pattern: r"@(mixin|include|extend)" },
            SignatureRule { weight: 4, pattern: r"&[.:#]" },
            SignatureRule { weight: 2, pattern: r"#\{.*\}" },
        ],
    },
    LanguageSignature {
        id: "json",
        rules: &[
            SignatureRule { weight: 10, pattern: r"(?s)^\s*\{.*\}\s*$" },
            SignatureRule { weight: 8, pattern: r#""[^"]*":\s*("[^"]*"|[0-9]+|true|false|null)"# },
            SignatureRule { weight: 4, pattern: r"(?s)^\s*\[.*\]\s*$" },
        ],
    },
    LanguageSignature {
        id: "yaml",
        rules: &[
            SignatureRule { weight: 8, pattern: r"(?m)^[a-zA-Z_-]+:\s*[^|>]" },
            SignatureRule { weight: 6, pattern: r"(?m)^\s*-\s+\w+" },
            SignatureRule { weight: 4, pattern: r"(?m)^---" },
        ],
    },
    LanguageSignature {
        id: "markdown",
        rules: &[
            SignatureRule { weight: 8, pattern: r"(?m)^#{1,6}\s+" },
            SignatureRule { weight: 6, pattern: r"\[.*\]\(.*\)" },
            SignatureRule { weight: 4, pattern: r"\*\*.*\*\*|\*.*\*" },
            SignatureRule { weight: 3, pattern: r"(?m)^```" },
        ],
    },
    LanguageSignature {
        id: "sql",
        rules: &[
            SignatureRule { weight: 10, pattern: r"(?i)\b(SELECT|FROM|WHERE|INSERT|UPDATE|DELETE)\b" },
            SignatureRule { weight: 8, pattern: r"(?i)\b(CREATE|ALTER|DROP)\s+(TABLE|DATABASE|INDEX)\b" },
            SignatureRule { weight: 6, pattern: r"(?i)\b(JOIN|INNER|LEFT|RIGHT|OUTER)\s+JOIN\b" },
            SignatureRule { weight: 4, pattern: r"(?m);$" },
        ],
    },
    LanguageSignature {
        id: "bash",
        rules: &[
            SignatureRule { weight: 10, pattern: r"^#!/bin/(bash|sh)" },
            SignatureRule { weight: 6, pattern: r"\b(echo|cd|ls|mkdir|rm|cp|mv|grep|awk|sed)\b" },
            SignatureRule { weight: 4, pattern: r"\$[a-zA-Z_][a-zA-Z0-9_]*" },
            SignatureRule { weight: 2, pattern: r"\|\s*\w+" },
        ],
    },
];

/// Validate the static table and priority order.
///
/// Intended as a startup check: a broken table would silently degrade
/// every future detection, so misconfiguration is fatal rather than
/// recovered per call. Checks id uniqueness, strictly positive weights,
/// pattern compilability, and that every priority entry names a table
/// language.
pub fn validate_signature_table() -> Result<(), SignatureTableError> {
    let mut seen = HashSet::new();
    for language in LANGUAGE_SIGNATURES {
        if !seen.insert(language.id) {
            return Err(SignatureTableError::DuplicateLanguage(
                language.id.to_string(),
            ));
        }
        for rule in language.rules {
            if rule.weight == 0 {
                return Err(SignatureTableError::ZeroWeight {
                    language: language.id.to_string(),
                    pattern: rule.pattern.to_string(),
                });
            }
            if let Err(e) = regex::Regex::new(rule.pattern) {
                return Err(SignatureTableError::InvalidPattern {
                    language: language.id.to_string(),
                    pattern: rule.pattern.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    if PRIORITY_ORDER.is_empty() {
        return Err(SignatureTableError::EmptyPriorityOrder);
    }
    for id in PRIORITY_ORDER {
        if !seen.contains(id) {
            return Err(SignatureTableError::UnknownPriorityLanguage(
                (*id).to_string(),
            ));
        }
    }

    Ok(())
}
