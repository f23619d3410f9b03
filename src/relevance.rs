//! Lexical relevance filter
//!
//! Coarse keyword matching used to score knowledge and template entries
//! against a palette query. This is deliberately not a ranked search engine:
//! a case-insensitive substring hit on any field counts as a match.

/// Check whether any haystack field contains the query as a substring,
/// case-insensitively. An empty query matches nothing; callers special-case
/// the empty query as contextual mode.
pub fn matches(query: &str, fields: &[&str]) -> bool {
    if query.trim().is_empty() {
        return false;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Binary presence score: 1.0 when any field matches, 0.0 otherwise
pub fn score(query: &str, fields: &[&str]) -> f32 {
    if matches(query, fields) { 1.0 } else { 0.0 }
}

/// Extract search keywords from free text: lowercased words longer than
/// three characters
pub fn keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.len() > 3)
        .map(str::to_string)
        .collect()
}

/// Filter `items` down to those whose haystack text contains any keyword of
/// `message`. When nothing matches, fall back to the first `fallback_take`
/// items so the caller always has some context to work with.
pub fn keyword_filter<'a, T, F>(
    message: &str,
    items: &'a [T],
    haystack: F,
    fallback_take: usize,
) -> Vec<&'a T>
where
    F: Fn(&T) -> String,
{
    let words = keywords(message);
    let matched: Vec<&T> = items
        .iter()
        .filter(|item| {
            let text = haystack(item).to_lowercase();
            words.iter().any(|w| text.contains(w.as_str()))
        })
        .collect();

    if matched.is_empty() {
        items.iter().take(fallback_take).collect()
    } else {
        matched
    }
}

#[cfg(test)]
#[path = "relevance_tests.rs"]
mod relevance_tests;
