//! Word token representation for page layout analysis.
//!
//! This module defines the value types the extractor operates on: positioned
//! word tokens, pages, the composite font grouping key, and the per-page
//! output record. All of them are derived, read-only data scoped to a single
//! extraction call.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single extracted word with its font identity and vertical span.
///
/// Tokens are produced by the external page-layout collaborator with
/// whitespace-collapsed text, in document text-flow order (not left-to-right
/// reading order). The extractor never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordToken {
    /// The word text
    pub text: String,
    /// Font name/family as reported by the layout collaborator
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Distance from the top of the page to the top of the word
    pub top: f32,
    /// Distance from the top of the page to the bottom of the word
    pub bottom: f32,
}

impl WordToken {
    /// Vertical extent of the token (`bottom - top`).
    ///
    /// Used as the anchor height when scaling the proximity tolerance during
    /// line clustering.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A page of positioned word tokens.
///
/// Token ordering reflects the collaborator's text-flow extraction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page height in the same units as token coordinates
    pub height: f32,
    /// Word tokens in text-flow order
    pub tokens: Vec<WordToken>,
}

/// Font size usable as a set element and map-key component.
///
/// `f32` is neither `Eq` nor `Hash`, but the heuristic needs to treat sizes as
/// exact grouping identities the way the layout collaborator reports them.
/// Equality and hashing go through the bit pattern; ordering uses the IEEE 754
/// total order, which is consistent with bit-level equality.
#[derive(Debug, Clone, Copy)]
pub struct FontSize(pub f32);

impl FontSize {
    /// The size in points.
    pub fn points(&self) -> f32 {
        self.0
    }
}

impl PartialEq for FontSize {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FontSize {}

impl Hash for FontSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for FontSize {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FontSize {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Composite grouping key identifying a font "role" on the page.
///
/// Two tokens share a key exactly when they share both font name and size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    /// Font name/family
    pub font_name: String,
    /// Font size
    pub size: FontSize,
}

impl FontKey {
    /// Build the grouping key for a token.
    pub fn of(token: &WordToken) -> Self {
        Self {
            font_name: token.font_name.clone(),
            size: FontSize(token.font_size),
        }
    }
}

/// Extraction output for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHeadings {
    /// Zero-based page index within the document
    pub page_index: usize,
    /// Text of the largest-font token in the page's top band, trimmed
    pub page_title: String,
    /// Surviving headline candidates in font-key discovery order
    pub headlines: Vec<String>,
}

impl PageHeadings {
    /// Empty result for a page with no text.
    pub fn empty(page_index: usize) -> Self {
        Self {
            page_index,
            page_title: String::new(),
            headlines: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn mock_token(text: &str, font: &str, size: f32, top: f32) -> WordToken {
        WordToken {
            text: text.to_string(),
            font_name: font.to_string(),
            font_size: size,
            top,
            bottom: top + size,
        }
    }

    #[test]
    fn test_token_height() {
        let token = mock_token("Extra", "Times", 18.0, 40.0);
        assert_eq!(token.height(), 18.0);
    }

    #[test]
    fn test_font_size_set_semantics() {
        let mut sizes = HashSet::new();
        sizes.insert(FontSize(12.0));
        sizes.insert(FontSize(12.0));
        sizes.insert(FontSize(18.5));
        assert_eq!(sizes.len(), 2);
    }

    #[test]
    fn test_font_size_ordering() {
        let mut sizes = vec![FontSize(9.0), FontSize(24.0), FontSize(12.0)];
        sizes.sort();
        assert_eq!(sizes[0], FontSize(9.0));
        assert_eq!(sizes[2], FontSize(24.0));
    }

    #[test]
    fn test_font_key_equality() {
        let a = FontKey::of(&mock_token("A", "Times-Bold", 24.0, 0.0));
        let b = FontKey::of(&mock_token("B", "Times-Bold", 24.0, 100.0));
        let c = FontKey::of(&mock_token("C", "Times-Bold", 18.0, 0.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_page_headings_empty() {
        let empty = PageHeadings::empty(4);
        assert_eq!(empty.page_index, 4);
        assert_eq!(empty.page_title, "");
        assert!(empty.headlines.is_empty());
    }

    #[test]
    fn test_word_token_json_round_trip() {
        let token = mock_token("Headline", "Helvetica", 21.0, 15.0);
        let json = serde_json::to_string(&token).unwrap();
        let back: WordToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
