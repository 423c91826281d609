//! Recommendation façade combining the similarity index (primary) with the
//! tag-overlap recommender (fallback).

use crate::{overlap, Catalog, Error, Item, Result, SimilarityIndex};
use tracing::debug;

/// Number of recommendations returned to callers.
pub const RECOMMEND_LIMIT: usize = 3;

/// How candidates are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One-hot cosine nearest neighbors; falls back to tag overlap when
    /// the item is unindexed or no index could be built.
    #[default]
    Similarity,
    /// Tag-overlap scoring only.
    TagOverlap,
}

/// Recommend up to [`RECOMMEND_LIMIT`] items similar to `name`.
///
/// Fails with `NotFound` only when `name` is absent from the catalog
/// entirely; an item that exists but is not indexed silently takes the
/// tag-overlap path. When fewer than [`RECOMMEND_LIMIT`] other indexed
/// items exist the similarity result is truncated, not an error.
pub fn recommend(
    name: &str,
    catalog: &Catalog,
    index: Option<&SimilarityIndex>,
    strategy: Strategy,
) -> Result<Vec<Item>> {
    let item = catalog
        .get(name)
        .ok_or_else(|| Error::NotFound(name.to_string()))?;

    if strategy == Strategy::Similarity {
        match index {
            Some(index) if index.contains(name) => {
                let k = RECOMMEND_LIMIT.min(index.len() - 1);
                let neighbors = index.k_nearest(name, k)?;
                return Ok(neighbors.into_iter().map(|(item, _)| item).collect());
            }
            Some(_) => debug!(name, "item not indexed, falling back to tag overlap"),
            None => debug!(name, "no similarity index, falling back to tag overlap"),
        }
    }

    Ok(overlap::top_matches(item, catalog, RECOMMEND_LIMIT))
}
