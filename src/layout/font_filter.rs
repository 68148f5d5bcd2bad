//! Dominant font-size selection and font-key grouping.
//!
//! Headlines use a handful of large type sizes; body text, the common case on
//! a broadsheet page, is set in one of the smaller sizes. Keeping only the
//! largest few distinct sizes discards the body text wholesale before any
//! per-token work happens.

use crate::layout::word_token::{FontKey, FontSize, WordToken};
use indexmap::IndexMap;

/// Number of distinct font sizes retained as headline material.
const DOMINANT_SIZE_COUNT: usize = 6;

/// Select the dominant font sizes on a page.
///
/// Collects the distinct sizes across `tokens`, sorts them descending, and
/// keeps at most the top [`DOMINANT_SIZE_COUNT`]. A page with fewer distinct
/// sizes retains all of them.
///
/// # Examples
///
/// ```
/// use newsprint::layout::font_filter::dominant_font_sizes;
/// use newsprint::layout::word_token::{FontSize, WordToken};
///
/// let tokens = vec![
///     WordToken { text: "A".into(), font_name: "T".into(), font_size: 12.0, top: 0.0, bottom: 12.0 },
///     WordToken { text: "B".into(), font_name: "T".into(), font_size: 24.0, top: 0.0, bottom: 24.0 },
/// ];
///
/// let sizes = dominant_font_sizes(&tokens);
/// assert_eq!(sizes, vec![FontSize(24.0), FontSize(12.0)]);
/// ```
pub fn dominant_font_sizes(tokens: &[WordToken]) -> Vec<FontSize> {
    let mut sizes: Vec<FontSize> = tokens.iter().map(|w| FontSize(w.font_size)).collect();
    sizes.sort_by(|a, b| b.cmp(a));
    sizes.dedup();
    sizes.truncate(DOMINANT_SIZE_COUNT);
    sizes
}

/// Group size-retained tokens into font-key buckets.
///
/// Partitions the tokens whose size appears in `dominant` by
/// `(font_name, font_size)`. The returned map preserves first-seen order of
/// each key while scanning `tokens` in their original order — downstream
/// headline ordering depends on that discovery order, so the buckets live in
/// an [`IndexMap`] rather than a hash map.
pub fn group_by_font_key<'a>(
    tokens: &'a [WordToken],
    dominant: &[FontSize],
) -> IndexMap<FontKey, Vec<&'a WordToken>> {
    let mut groups: IndexMap<FontKey, Vec<&WordToken>> = IndexMap::new();

    for token in tokens {
        if dominant.contains(&FontSize(token.font_size)) {
            groups.entry(FontKey::of(token)).or_default().push(token);
        }
    }

    groups
}
