//! Response sanitizer
//!
//! Provider text is rendered in the browser, so angle brackets are removed
//! before it leaves the server. Only `<` and `>` are stripped; tag contents
//! and other characters are kept as-is.

/// Maximum number of characters kept in a description
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Trim, strip `<`/`>`, and truncate provider text
///
/// The steps run in that order, so whitespace exposed by removing a bracket
/// at either end is kept.
pub fn sanitize_description(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(MAX_DESCRIPTION_CHARS)
        .collect()
}
