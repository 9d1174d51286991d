//! Final result assembly: first-seen deduplication and extension filtering

use std::collections::HashSet;

/// File-type suffixes retained in the final output
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "svg"];

/// Deduplicates and filters a sequence of file titles.
///
/// Keeps the first occurrence of each exact title string (dedup is
/// case-sensitive on the full title), then retains only titles whose
/// lowercased suffix after the last `.` is one of [`ALLOWED_EXTENSIONS`].
/// Titles without a `.` are excluded. Idempotent.
#[must_use]
pub fn finalize(titles: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter(|title| seen.insert(title.clone()))
        .filter(|title| has_allowed_extension(title))
        .collect()
}

fn has_allowed_extension(title: &str) -> bool {
    title
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
