//! Vertical-proximity clustering of same-font tokens.
//!
//! A multi-line headline keeps its font treatment across the wrap, so tokens
//! that share a font key and sit within a few line-heights of each other
//! belong to the same heading. Clustering tolerates minor vertical jitter from
//! font rendering by scaling the threshold with the anchor token's height.

use crate::layout::word_token::WordToken;
use crate::utils::safe_float_cmp;

/// Multiplier applied to an anchor token's height to get the proximity
/// threshold.
pub const LINE_TOLERANCE: f32 = 3.0;

/// Cluster a font-key bucket's tokens by vertical proximity.
///
/// Tokens are stable-sorted by `top` ascending, then swept once: the first
/// unconsumed token anchors a cluster, and subsequent tokens join while
/// `|token.top - anchor.top| <= LINE_TOLERANCE * anchor.height()`. The first
/// token outside the threshold closes the cluster and anchors the next one;
/// the sweep never looks past it for stragglers.
///
/// Returns the clusters in sweep order. Every input token lands in exactly
/// one cluster.
pub fn cluster_by_proximity<'a>(tokens: &[&'a WordToken]) -> Vec<Vec<&'a WordToken>> {
    let mut sorted: Vec<&WordToken> = tokens.to_vec();
    sorted.sort_by(|a, b| safe_float_cmp(a.top, b.top));

    let mut clusters: Vec<Vec<&WordToken>> = Vec::new();

    let mut i = 0;
    while i < sorted.len() {
        let anchor = sorted[i];
        let threshold = LINE_TOLERANCE * anchor.height();

        let mut cluster = vec![anchor];
        let mut j = i + 1;
        while j < sorted.len() {
            if (sorted[j].top - anchor.top).abs() <= threshold {
                cluster.push(sorted[j]);
                j += 1;
            } else {
                break;
            }
        }

        clusters.push(cluster);
        i = j;
    }

    clusters
}
