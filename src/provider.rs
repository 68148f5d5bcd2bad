//! Page layout provider seam.
//!
//! PDF decoding and word-token extraction belong to an external collaborator.
//! The extractor only needs an ordered sequence of pages, each exposing its
//! height and its word tokens in text-flow order; this module defines that
//! seam and a JSON-backed implementation used by fixtures, tests, and the
//! demo binary.

use crate::error::{Error, Result};
use crate::layout::word_token::Page;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Source of decomposed page layouts for one document.
///
/// Implementations must report pages in document order and surface their own
/// failures (corrupt input, missing attributes) as errors — the extractor
/// propagates them uncaught and performs no recovery.
pub trait PageLayoutProvider {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<usize>;

    /// Extract the word-token layout of one page.
    ///
    /// Tokens must arrive whitespace-collapsed, in the collaborator's
    /// text-flow extraction order. The extractor never re-sorts a page.
    fn extract_page(&self, index: usize) -> Result<Page>;
}

/// Layout provider backed by a JSON document.
///
/// The document is a JSON array of pages, each
/// `{"height": ..., "tokens": [{"text", "font_name", "font_size", "top", "bottom"}, ...]}`.
/// Stands in for the out-of-scope PDF collaborator when layouts have already
/// been extracted elsewhere.
#[derive(Debug, Clone)]
pub struct JsonLayoutProvider {
    pages: Vec<Page>,
}

impl JsonLayoutProvider {
    /// Build a provider from already-decoded pages.
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Load a layout document from a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a layout document from any reader producing layout JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let pages: Vec<Page> = serde_json::from_reader(reader)?;
        Ok(Self::new(pages))
    }
}

impl PageLayoutProvider for JsonLayoutProvider {
    fn page_count(&self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn extract_page(&self, index: usize) -> Result<Page> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| Error::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT_JSON: &str = r#"[
        {
            "height": 1000.0,
            "tokens": [
                {"text": "Masthead", "font_name": "Blackletter", "font_size": 48.0, "top": 10.0, "bottom": 58.0}
            ]
        },
        {"height": 1000.0, "tokens": []}
    ]"#;

    #[test]
    fn test_from_reader() {
        let provider = JsonLayoutProvider::from_reader(LAYOUT_JSON.as_bytes()).unwrap();
        assert_eq!(provider.page_count().unwrap(), 2);

        let page = provider.extract_page(0).unwrap();
        assert_eq!(page.height, 1000.0);
        assert_eq!(page.tokens[0].text, "Masthead");
    }

    #[test]
    fn test_page_out_of_range() {
        let provider = JsonLayoutProvider::from_reader(LAYOUT_JSON.as_bytes()).unwrap();
        let err = provider.extract_page(5).unwrap_err();
        assert!(matches!(err, Error::PageOutOfRange { index: 5, .. }));
    }

    #[test]
    fn test_malformed_json_propagates() {
        let result = JsonLayoutProvider::from_reader("not json".as_bytes());
        assert!(matches!(result, Err(Error::InvalidLayout(_))));
    }
}
