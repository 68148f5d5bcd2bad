//! Layout heuristics for headline extraction.
//!
//! This module provides the per-page analysis stages:
//! - Page title detection in the top band
//! - Dominant font-size selection and font-key grouping
//! - Vertical-proximity clustering of same-font tokens
//! - Validity filtering of assembled candidates

pub mod font_filter;
pub mod heading_validator;
pub mod line_clustering;
pub mod title_detector;
pub mod word_token;

// Re-export main types
pub use font_filter::{dominant_font_sizes, group_by_font_key};
pub use heading_validator::is_valid_heading;
pub use line_clustering::{cluster_by_proximity, LINE_TOLERANCE};
pub use title_detector::detect_page_title;
pub use word_token::{FontKey, FontSize, Page, PageHeadings, WordToken};
