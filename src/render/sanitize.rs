//! # Explanation Sanitization
//!
//! Post-processing for rephrased text: forbidden unit tokens become the
//! LKR currency token, meta-commentary parentheticals are stripped, and
//! multi-line output collapses to a single line. The whole pass is
//! idempotent, so re-sanitizing already-clean text is a no-op.

use std::sync::OnceLock;

use regex::Regex;

/// Unit tokens foreign to the LKR currency, replaced case-preservingly.
const UNIT_REPLACEMENTS: &[(&str, &str)] = &[
    ("dollar", "LKR"),
    ("Dollar", "LKR"),
    ("USD", "LKR"),
    ("unit", "LKR"),
    ("Unit", "LKR"),
    ("kWh", "LKR"),
];

/// Parenthetical asides that are artifacts of the rephrasing step:
/// first-person remarks, "removed" notes, appeals to naturalness.
fn meta_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"\(I[^)]*\)").expect("static pattern"),
            Regex::new(r"(?i)\([^)]*removed[^)]*\)").expect("static pattern"),
            Regex::new(r"(?i)\([^)]*natural[^)]*\)").expect("static pattern"),
        ]
    })
}

/// Sanitize rephrased text. Applied to every non-empty external response
/// before the containment guarantees are enforced.
pub fn sanitize(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in UNIT_REPLACEMENTS {
        out = out.replace(from, to);
    }
    for pattern in meta_patterns() {
        out = pattern.replace_all(&out, "").into_owned();
    }
    out.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
