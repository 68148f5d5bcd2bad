//! Error types for the headline extraction library.
//!
//! This module defines all error types that can occur while loading page
//! layouts and running extraction.

/// Result type alias for headline extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during headline extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page layout provider failed to produce a page
    #[error("Layout provider failed for page {page}: {reason}")]
    Provider {
        /// Zero-based index of the page that failed
        page: usize,
        /// Reason reported by the provider
        reason: String,
    },

    /// Page index outside the document's page range
    #[error("Page index out of range: {index} (document has {page_count} pages)")]
    PageOutOfRange {
        /// Requested page index
        index: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Layout JSON could not be decoded
    #[error("Invalid layout JSON: {0}")]
    InvalidLayout(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
