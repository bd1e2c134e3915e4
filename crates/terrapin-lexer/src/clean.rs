//! Raw input cleaning.

use tracing::debug;

/// Strip comment lines and split the script into whitespace-delimited words.
///
/// A line whose first non-blank character is `#` is a comment and is dropped
/// whole; everything else splits on any run of whitespace. Returns the words
/// in source order.
pub fn clean(raw: &str) -> Vec<String> {
    let words: Vec<String> = raw
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_owned)
        .collect();
    debug!(words = words.len(), "cleaned input");
    words
}
