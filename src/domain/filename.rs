//! Output file naming

use regex::Regex;
use std::sync::OnceLock;

/// Suffix appended to every sanitized base name in the archive
pub const OUTPUT_SUFFIX: &str = "_tagged.xml";

/// Matches the ` (2)` suffix browsers and hosts add to duplicate uploads
fn duplicate_suffix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r" \(\d+\)$").unwrap())
}

/// Strip the extension and any duplicate-upload counter from a file name.
///
/// `"My File (2).txt"` becomes `"My File"`. A leading dot (`.notes`) is part
/// of the name, not an extension.
pub fn sanitize_id(original: &str) -> String {
    let base = strip_extension(original);
    duplicate_suffix_regex()
        .replace(base, "")
        .trim()
        .to_string()
}

/// Archive member name for an input file, e.g. `plain_tagged.xml`
pub fn output_name(original: &str) -> String {
    format!("{}{}", sanitize_id(original), OUTPUT_SUFFIX)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if !name[..idx].chars().all(|c| c == '.') => &name[..idx],
        _ => name,
    }
}
