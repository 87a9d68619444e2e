//! Memoized collection pipeline.
//!
//! Filtering and sorting only need to rerun when filters, sort, or the
//! underlying items change. Page turns reuse the cached order.

use crate::model::{FilterSet, Item, SortDescriptor};
use crate::view_state::collection::{
    ordered_indices, view_from_indices, CollectionQuery, CollectionView,
};
use tracing::trace;

/// Key for the cached order.
///
/// Includes everything that affects filtering and sorting. `revision` is
/// supplied by the owner of the items and must change whenever they change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineCacheKey {
    /// Filters in effect.
    pub filters: FilterSet,
    /// Sort in effect.
    pub sort: Option<SortDescriptor>,
    /// Item count when computed.
    pub item_count: usize,
    /// Caller-owned data revision.
    pub revision: u64,
}

/// Single-entry cache of the filtered and sorted index order.
#[derive(Debug, Clone, Default)]
pub struct PipelineCache {
    key: Option<PipelineCacheKey>,
    order: Vec<usize>,
    hits: u64,
    misses: u64,
}

impl PipelineCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the view, recomputing the order only when the key changed.
    pub fn view<'a>(
        &mut self,
        items: &'a [Item],
        revision: u64,
        query: &CollectionQuery<'_>,
    ) -> CollectionView<'a> {
        let key = PipelineCacheKey {
            filters: query.filters.clone(),
            sort: query.sort.cloned(),
            item_count: items.len(),
            revision,
        };

        if self.key.as_ref() == Some(&key) {
            self.hits += 1;
            trace!(hits = self.hits, "Pipeline cache hit");
        } else {
            self.misses += 1;
            trace!(misses = self.misses, "Pipeline cache miss");
            self.order = ordered_indices(items, query.filters, query.sort);
            self.key = Some(key);
        }

        view_from_indices(items, &self.order, query.page, query.page_size)
    }

    /// Drop the cached order.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.order.clear();
    }

    /// Number of lookups that reused the cached order.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that recomputed the order.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
