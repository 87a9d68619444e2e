//! Collection pipeline: filter → sort → paginate.
//!
//! Everything here is a pure function of its inputs. The reducer in
//! `state::collection` owns the mutable selections and calls into this module
//! to decide what is visible.
//!
//! # Pagination contract
//!
//! - `page_size > 0`: total pages is `max(1, ceil(filtered / page_size))` and
//!   the page shows `[(page-1)*page_size, page*page_size)`.
//! - `page_size == 0`: no pagination, everything on one page.
//! - A requested page outside `[1, total_pages]` is clamped into range.

use crate::model::item::TAG_KEY;
use crate::model::{FieldValue, FilterSet, Item, SortDescriptor};
use std::collections::HashSet;

/// Everything the pipeline needs besides the items.
#[derive(Debug, Clone, Copy)]
pub struct CollectionQuery<'a> {
    /// Active filters.
    pub filters: &'a FilterSet,
    /// Active sort, `None` keeps original order.
    pub sort: Option<&'a SortDescriptor>,
    /// Requested page (1-indexed). Clamped.
    pub page: usize,
    /// Items per page. `0` disables pagination.
    pub page_size: usize,
}

/// Page metadata for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page after clamping (1-indexed).
    pub page: usize,
    /// Total pages, never less than 1.
    pub total_pages: usize,
    /// Page size in effect (`0` = unpaginated).
    pub page_size: usize,
    /// Items passing the filters.
    pub filtered_count: usize,
    /// Items before filtering.
    pub total_count: usize,
    /// Start offset of the page within the filtered list (inclusive).
    pub start: usize,
    /// End offset of the page within the filtered list (exclusive).
    pub end: usize,
}

impl PageInfo {
    /// Whether a following page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a preceding page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether no item matched the filters.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// Human range label, e.g. `"9-16 of 24"`. Empty results give `"0 of 0"`.
    pub fn range_label(&self) -> String {
        if self.filtered_count == 0 {
            return "0 of 0".to_string();
        }
        format!("{}-{} of {}", self.start + 1, self.end, self.filtered_count)
    }
}

/// The visible subset plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<'a> {
    /// Items on the current page, in display order.
    pub items: Vec<&'a Item>,
    /// Page metadata.
    pub page: PageInfo,
}

/// Total pages for a filtered count. Always at least 1.
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    filtered_count.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Indices of items passing `filters` and then ordered by `sort`.
///
/// The sort is stable: equal items keep their original relative order.
pub fn ordered_indices(
    items: &[Item],
    filters: &FilterSet,
    sort: Option<&SortDescriptor>,
) -> Vec<usize> {
    let mut indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| filters.accepts(item))
        .map(|(i, _)| i)
        .collect();

    if let Some(sort) = sort {
        indices.sort_by(|&a, &b| sort.compare(&items[a], &items[b]));
    }

    indices
}

/// Compute page metadata for `filtered_count` items.
pub fn page_info(
    filtered_count: usize,
    total_count: usize,
    page: usize,
    page_size: usize,
) -> PageInfo {
    let total_pages = total_pages(filtered_count, page_size);
    let page = clamp_page(page, total_pages);
    let (start, end) = if page_size == 0 {
        (0, filtered_count)
    } else {
        let start = (page - 1).saturating_mul(page_size).min(filtered_count);
        let end = start.saturating_add(page_size).min(filtered_count);
        (start, end)
    };

    PageInfo {
        page,
        total_pages,
        page_size,
        filtered_count,
        total_count,
        start,
        end,
    }
}

/// Slice an ordered index list into the requested page.
pub fn view_from_indices<'a>(
    items: &'a [Item],
    order: &[usize],
    page: usize,
    page_size: usize,
) -> CollectionView<'a> {
    let info = page_info(order.len(), items.len(), page, page_size);
    let visible = order[info.start..info.end]
        .iter()
        .map(|&i| &items[i])
        .collect();

    CollectionView {
        items: visible,
        page: info,
    }
}

/// Run the full pipeline.
pub fn derive_view<'a>(items: &'a [Item], query: &CollectionQuery<'_>) -> CollectionView<'a> {
    let order = ordered_indices(items, query.filters, query.sort);
    view_from_indices(items, &order, query.page, query.page_size)
}

/// One choice in a filter select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Value passed back as the selection.
    pub value: String,
    /// Items that would match if this value were selected, given the other
    /// active filters.
    pub count: usize,
}

/// Distinct values present for `key`, in sort order, with match counts.
///
/// For the `tag` key the values are the union of all item tags.
pub fn filter_options(items: &[Item], filters: &FilterSet, key: &str) -> Vec<FilterOption> {
    let mut values: Vec<(String, FieldValue<'_>)> = Vec::new();
    let mut seen = HashSet::new();

    for item in items {
        let fields: Vec<FieldValue<'_>> = if key == TAG_KEY {
            item.tags
                .iter()
                .map(|t| FieldValue::Text(t.as_str()))
                .collect()
        } else {
            item.field(key).into_iter().collect()
        };
        for field in fields {
            let display = field.display();
            if seen.insert(display.clone()) {
                values.push((display, field));
            }
        }
    }

    values.sort_by(|(da, fa), (db, fb)| fa.compare(fb).then_with(|| da.cmp(db)));

    values
        .into_iter()
        .map(|(value, _)| {
            let count = items
                .iter()
                .filter(|item| filters.accepts_except(item, key) && item.matches(key, &value))
                .count();
            FilterOption { value, count }
        })
        .collect()
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
