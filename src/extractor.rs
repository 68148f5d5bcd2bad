//! Headline extraction pipeline.
//!
//! Runs the four per-page stages in sequence — title detection, dominant
//! font-size selection, font-key grouping, proximity clustering plus validity
//! filtering — and assembles the per-document result map. Each page is a pure
//! function of its own token list, so pages run in parallel and fan back in
//! by page index.

use crate::error::Result;
use crate::layout::font_filter::{dominant_font_sizes, group_by_font_key};
use crate::layout::heading_validator::is_valid_heading;
use crate::layout::line_clustering::cluster_by_proximity;
use crate::layout::title_detector::detect_page_title;
use crate::layout::word_token::{Page, PageHeadings};
use crate::provider::PageLayoutProvider;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Extract headline candidates for every page of a document.
///
/// Pages are processed independently (in parallel) and the results are keyed
/// by zero-based page index, so iteration over the returned map follows page
/// order regardless of completion order. Provider failures propagate to the
/// caller untouched.
///
/// # Examples
///
/// ```
/// use newsprint::extractor::extract_headings;
/// use newsprint::provider::JsonLayoutProvider;
/// use newsprint::layout::word_token::Page;
///
/// let provider = JsonLayoutProvider::new(vec![Page { height: 1000.0, tokens: vec![] }]);
/// let headings = extract_headings(&provider).unwrap();
/// assert_eq!(headings[&0].headlines.len(), 0);
/// ```
pub fn extract_headings<P: PageLayoutProvider + Sync>(
    provider: &P,
) -> Result<BTreeMap<usize, PageHeadings>> {
    let page_count = provider.page_count()?;
    log::info!("Extracting headlines from {} pages", page_count);

    let results = (0..page_count)
        .into_par_iter()
        .map(|index| {
            let page = provider.extract_page(index)?;
            Ok((index, extract_page_headings(&page, index)))
        })
        .collect::<Result<BTreeMap<usize, PageHeadings>>>()?;

    Ok(results)
}

/// Run the extraction stages for a single page.
///
/// A page with no tokens short-circuits to an empty result; that is the one
/// non-error edge case the pipeline defines.
pub fn extract_page_headings(page: &Page, index: usize) -> PageHeadings {
    if page.tokens.is_empty() {
        return PageHeadings::empty(index);
    }

    let page_title = detect_page_title(page);

    let dominant = dominant_font_sizes(&page.tokens);
    let groups = group_by_font_key(&page.tokens, &dominant);
    log::debug!(
        "Page {}: {} dominant sizes, {} font-key buckets",
        index,
        dominant.len(),
        groups.len()
    );

    let mut headlines = Vec::new();

    for (key, bucket) in &groups {
        let clusters = cluster_by_proximity(bucket);

        // Cluster boundaries gate only the proximity traversal; all clusters
        // of a font key collapse into one candidate string.
        let sentence = clusters
            .iter()
            .flatten()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if !sentence.is_empty() && is_valid_heading(&sentence) {
            log::debug!("Page {}: accepted candidate for {:?}: {}", index, key, sentence);
            headlines.push(sentence);
        }
    }

    PageHeadings {
        page_index: index,
        page_title,
        headlines,
    }
}
