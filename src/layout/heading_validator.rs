//! Noise filter for assembled headline candidates.
//!
//! Large type on a newspaper page is not always a headline: page numbers,
//! column markers, and stray masthead fragments all survive the size filter.
//! This module rejects the candidates that cannot be meaningful headlines.

/// Candidate strings rejected outright, compared lowercase.
///
/// Recurring printer's marks observed in scanned broadsheets.
const BLACKLIST: [&str; 2] = ["p1 p1", "u u"];

/// Minimum untrimmed character count for a candidate.
const MIN_LEN: usize = 5;

/// Check whether a candidate string is a meaningful headline.
///
/// Rejects the candidate when any of the following holds:
/// - the trimmed string is empty;
/// - it has at most one whitespace-separated word;
/// - every whitespace-separated word is purely numeric;
/// - its untrimmed character count is below 5;
/// - its lowercase form is blacklisted.
///
/// # Examples
///
/// ```
/// use newsprint::layout::heading_validator::is_valid_heading;
///
/// assert!(is_valid_heading("Valid Headline Text"));
/// assert!(!is_valid_heading("Word"));
/// assert!(!is_valid_heading("123 456"));
/// ```
pub fn is_valid_heading(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 1 {
        return false;
    }

    if words
        .iter()
        .all(|w| !w.is_empty() && w.chars().all(|c| c.is_numeric()))
    {
        return false;
    }

    if text.chars().count() < MIN_LEN {
        return false;
    }

    if BLACKLIST.contains(&text.to_lowercase().as_str()) {
        return false;
    }

    true
}
