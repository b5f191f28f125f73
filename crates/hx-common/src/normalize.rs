use std::collections::HashSet;

/// Trim + lowercase; blank entries are dropped.
pub fn normalize_term(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case/whitespace-insensitive set used by every sub-scorer.
pub fn normalized_set<I, S>(values: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|value| normalize_term(value.as_ref()))
        .collect()
}

/// Trims each entry and drops blanks and case-insensitive duplicates.
///
/// The first spelling seen wins and input order is kept, so the result can be
/// shown back to users as entered.
pub fn dedupe_preserving_order<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();

    for value in values {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            ordered.push(trimmed.to_string());
        }
    }

    ordered
}

/// Lowercased whitespace tokens, as a set.
pub fn word_tokens(text: &str) -> HashSet<String> {
    normalized_set(text.split_whitespace())
}
