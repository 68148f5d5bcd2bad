//! # Newsprint
//!
//! Layout-based headline extraction from scanned newspaper pages.
//!
//! Given pages already decomposed into positioned word tokens (text, font
//! name, font size, vertical span), the extractor produces a page title and an
//! ordered list of headline candidates per page. It is a heuristic classifier
//! built on font-size dominance and vertical proximity, not a layout parser:
//! reading-order reconstruction and article boundary detection are explicitly
//! out of scope.
//!
//! ## Pipeline
//!
//! Four stages run per page:
//! 1. **Title detection** — largest-font token in the page's top 5% band
//! 2. **Dominant font-size selection** — keep the top 6 distinct sizes
//! 3. **Font-key grouping** — bucket tokens by `(font_name, font_size)`,
//!    preserving first-seen order
//! 4. **Proximity clustering + validity filter** — merge vertically close
//!    same-font tokens, then drop candidates that cannot be headlines
//!
//! Pages are independent and run in parallel; results fan back in by page
//! index.
//!
//! ## Quick Start
//!
//! ```
//! use newsprint::extractor::extract_headings;
//! use newsprint::provider::JsonLayoutProvider;
//!
//! # fn main() -> newsprint::Result<()> {
//! let layout = r#"[{
//!     "height": 1000.0,
//!     "tokens": [
//!         {"text": "Rates", "font_name": "Times-Bold", "font_size": 30.0, "top": 100.0, "bottom": 130.0},
//!         {"text": "cut", "font_name": "Times-Bold", "font_size": 30.0, "top": 100.0, "bottom": 130.0},
//!         {"text": "again", "font_name": "Times-Bold", "font_size": 30.0, "top": 100.0, "bottom": 130.0}
//!     ]
//! }]"#;
//!
//! let provider = JsonLayoutProvider::from_reader(layout.as_bytes())?;
//! let headings = extract_headings(&provider)?;
//! assert_eq!(headings[&0].headlines, vec!["Rates cut again"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Per-page layout heuristics
pub mod layout;

// Page layout provider seam
pub mod provider;

// Document-level extraction pipeline
pub mod extractor;

// Re-exports
pub use error::{Error, Result};
pub use extractor::{extract_headings, extract_page_headings};
pub use layout::word_token::{FontKey, FontSize, Page, PageHeadings, WordToken};
pub use provider::{JsonLayoutProvider, PageLayoutProvider};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting operations never panic on NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap(),
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "newsprint");
    }
}
