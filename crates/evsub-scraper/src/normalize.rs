//! Whitespace normalization for query parameters and fetched page text.

/// Trims both ends and collapses every run of whitespace to one space.
///
/// Unicode whitespace counts, so non-breaking and ideographic spaces that
/// show up in scraped Korean pages fold the same way as ASCII blanks.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
