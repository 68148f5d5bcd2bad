//! Page title detection.
//!
//! The masthead of a newspaper page sits in a narrow band at the very top of
//! the sheet and uses the largest type in that band. This module picks the
//! token that best matches that description.

use crate::layout::word_token::Page;
use crate::utils::safe_float_cmp;

/// Fraction of the page height considered the title band.
const TITLE_BAND: f32 = 0.05;

/// Detect the page title.
///
/// Selects tokens whose `top` falls within the top 5% of the page, stable-sorts
/// them by font size descending, and returns the first token's trimmed text.
/// Ties on the maximal size resolve to the token seen first in original scan
/// order (the sort is stable).
///
/// Returns an empty string when the band contains no tokens, or when the
/// winning token has empty text.
///
/// # Examples
///
/// ```
/// use newsprint::layout::word_token::{Page, WordToken};
/// use newsprint::layout::title_detector::detect_page_title;
///
/// let page = Page {
///     height: 1000.0,
///     tokens: vec![WordToken {
///         text: "The Daily Bugle".to_string(),
///         font_name: "Blackletter".to_string(),
///         font_size: 48.0,
///         top: 10.0,
///         bottom: 58.0,
///     }],
/// };
///
/// assert_eq!(detect_page_title(&page), "The Daily Bugle");
/// ```
pub fn detect_page_title(page: &Page) -> String {
    let mut top_band: Vec<_> = page
        .tokens
        .iter()
        .filter(|w| w.top < TITLE_BAND * page.height)
        .collect();

    top_band.sort_by(|a, b| safe_float_cmp(b.font_size, a.font_size));

    match top_band.first() {
        Some(w) if !w.text.is_empty() => w.text.trim().to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::word_token::WordToken;

    fn mock_token(text: &str, size: f32, top: f32) -> WordToken {
        WordToken {
            text: text.to_string(),
            font_name: "Times".to_string(),
            font_size: size,
            top,
            bottom: top + size,
        }
    }

    #[test]
    fn test_title_from_top_band() {
        let page = Page {
            height: 1000.0,
            tokens: vec![
                mock_token("Masthead", 48.0, 10.0),
                mock_token("dateline", 10.0, 20.0),
                mock_token("Body", 12.0, 400.0),
            ],
        };
        assert_eq!(detect_page_title(&page), "Masthead");
    }

    #[test]
    fn test_title_band_is_five_percent() {
        // top = 50.0 is exactly the band edge on a 1000pt page; strict
        // comparison excludes it
        let page = Page {
            height: 1000.0,
            tokens: vec![mock_token("Excluded", 48.0, 50.0)],
        };
        assert_eq!(detect_page_title(&page), "");
    }

    #[test]
    fn test_title_empty_band() {
        let page = Page {
            height: 1000.0,
            tokens: vec![mock_token("Deep", 30.0, 500.0)],
        };
        assert_eq!(detect_page_title(&page), "");
    }

    #[test]
    fn test_title_largest_size_wins() {
        let page = Page {
            height: 1000.0,
            tokens: vec![
                mock_token("small", 8.0, 5.0),
                mock_token("BIG", 36.0, 12.0),
                mock_token("medium", 18.0, 30.0),
            ],
        };
        assert_eq!(detect_page_title(&page), "BIG");
    }

    #[test]
    fn test_title_tie_breaks_to_scan_order() {
        let page = Page {
            height: 1000.0,
            tokens: vec![
                mock_token("First", 36.0, 5.0),
                mock_token("Second", 36.0, 5.0),
            ],
        };
        assert_eq!(detect_page_title(&page), "First");
    }

    #[test]
    fn test_title_is_trimmed() {
        let page = Page {
            height: 1000.0,
            tokens: vec![mock_token("  Spaced Out  ", 36.0, 5.0)],
        };
        assert_eq!(detect_page_title(&page), "Spaced Out");
    }
}
