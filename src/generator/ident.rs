use crate::error::AuthzError;
use once_cell::sync::Lazy;
use regex::Regex;

static IDENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex should be valid")
});

/// Strict and reserved Rust keywords; none of them can name a module.
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Check that `namespace` can be used verbatim as a Rust module name.
pub fn validate_namespace(namespace: &str) -> Result<(), AuthzError> {
    let reason = if namespace.is_empty() {
        Some("must not be empty")
    } else if !IDENT_REGEX.is_match(namespace) {
        Some("must start with a letter or '_' and contain only ASCII letters, digits and '_'")
    } else if namespace == "_" {
        Some("'_' is not a usable identifier")
    } else if RUST_KEYWORDS.contains(&namespace) {
        Some("is a Rust keyword")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AuthzError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
