//! Keystroke normalization
//!
//! The USSD gateway resends the whole conversation's input on every round
//! trip, joined with `*`. Only the last segment is new.

/// Separator the gateway places between keystroke segments
pub const SEGMENT_SEPARATOR: char = '*';

/// Extract the latest keystroke segment from the cumulative input.
pub fn normalize(cumulative: &str) -> &str {
    cumulative
        .rsplit(SEGMENT_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
}

/// Split a query into ingredients: comma separated, trimmed, blanks dropped.
pub fn parse_ingredients(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_string)
        .collect()
}
