//! Collection view reducer.
//!
//! Owns the mutable selections of a filterable, sortable, paginated
//! collection (filters, sort, page, page size, view mode) and applies
//! [`CollectionAction`]s to them. What is visible is always derived through
//! [`crate::view_state::collection`]; this module never stores the derived
//! subset.
//!
//! Transition rules:
//! - A filter change resets the page to 1.
//! - A sort change keeps the page.
//! - Page requests are clamped into `[1, total_pages]`.
//! - A page size change resets the page to 1.

use crate::model::{
    CollectionEvent, FilterDefinition, FilterSelection, FilterSet, Item, ItemId, SortDescriptor,
    SortOption, ViewMode,
};
use crate::view_state::collection::{
    derive_view, filter_options, total_pages, CollectionQuery, CollectionView,
};
use tracing::{debug, trace, warn};

/// Selections for one mounted collection view.
///
/// # Invariants
/// - `page >= 1`.
/// - After every [`handle_collection_action`] call, `page <= total_pages`
///   for the items the action was applied against.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState {
    filters: FilterSet,
    filter_definitions: Vec<FilterDefinition>,
    sort: Option<SortDescriptor>,
    default_sort: Option<SortDescriptor>,
    sort_options: Vec<SortOption>,
    page: usize,
    page_size: usize,
    view_mode: ViewMode,
    default_view_mode: ViewMode,
}

impl CollectionState {
    /// Unfiltered, unsorted collection on page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: FilterSet::new(),
            filter_definitions: Vec::new(),
            sort: None,
            default_sort: None,
            sort_options: Vec::new(),
            page: 1,
            page_size,
            view_mode: ViewMode::default(),
            default_view_mode: ViewMode::default(),
        }
    }

    /// Builder: filter keys offered by the filter bar.
    pub fn with_filters(mut self, definitions: Vec<FilterDefinition>) -> Self {
        self.filter_definitions = definitions;
        self
    }

    /// Builder: labelled sort choices.
    pub fn with_sort_options(mut self, options: Vec<SortOption>) -> Self {
        self.sort_options = options;
        self
    }

    /// Builder: initial sort, also restored by [`CollectionAction::Reset`].
    pub fn with_default_sort(mut self, sort: SortDescriptor) -> Self {
        self.default_sort = Some(sort.clone());
        self.sort = Some(sort);
        self
    }

    /// Builder: initial view mode, also restored by [`CollectionAction::Reset`].
    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.default_view_mode = mode;
        self.view_mode = mode;
        self
    }

    /// Active filters.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Filter keys offered by the filter bar.
    pub fn filter_definitions(&self) -> &[FilterDefinition] {
        &self.filter_definitions
    }

    /// Active sort.
    pub fn sort(&self) -> Option<&SortDescriptor> {
        self.sort.as_ref()
    }

    /// Labelled sort choices.
    pub fn sort_options(&self) -> &[SortOption] {
        &self.sort_options
    }

    /// The sort option matching the active sort, if any.
    pub fn selected_sort_option(&self) -> Option<&SortOption> {
        let sort = self.sort.as_ref()?;
        self.sort_options.iter().find(|o| &o.descriptor == sort)
    }

    /// Requested page (1-indexed).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page (`0` = unpaginated).
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Grid or list.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Pipeline query for the current selections.
    pub fn query(&self) -> CollectionQuery<'_> {
        CollectionQuery {
            filters: &self.filters,
            sort: self.sort.as_ref(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Derive the visible page of `items`.
    pub fn view<'a>(&self, items: &'a [Item]) -> CollectionView<'a> {
        derive_view(items, &self.query())
    }

    /// Clamp the page against `items` (after the backing list changed).
    ///
    /// Returns the page change, if any.
    pub fn reconcile(&mut self, items: &[Item]) -> Option<CollectionEvent> {
        let total = total_pages(self.filtered_count(items), self.page_size);
        if self.page > total {
            warn!(
                page = self.page,
                total,
                "Page past end after data change, clamping"
            );
            self.page = total;
            return Some(CollectionEvent::PageChanged { page: total });
        }
        None
    }

    fn filtered_count(&self, items: &[Item]) -> usize {
        items
            .iter()
            .filter(|item| self.filters.accepts(item))
            .count()
    }

    fn go_to_page(&mut self, requested: usize, items: &[Item], events: &mut Vec<CollectionEvent>) {
        let total = total_pages(self.filtered_count(items), self.page_size);
        let page = requested.clamp(1, total);
        if page != requested {
            trace!(requested, page, total, "Page request clamped");
        }
        if page != self.page {
            self.page = page;
            debug!(page, "Page changed");
            events.push(CollectionEvent::PageChanged { page });
        }
    }

    fn reset_page(&mut self, events: &mut Vec<CollectionEvent>) {
        if self.page != 1 {
            self.page = 1;
            events.push(CollectionEvent::PageChanged { page: 1 });
        }
    }

    fn apply_sort(&mut self, sort: Option<SortDescriptor>, events: &mut Vec<CollectionEvent>) {
        if self.sort == sort {
            return;
        }
        debug!(sort = ?sort, "Sort changed");
        self.sort = sort.clone();
        events.push(CollectionEvent::SortChanged { sort });
    }

    fn apply_view_mode(&mut self, mode: ViewMode, events: &mut Vec<CollectionEvent>) {
        if self.view_mode != mode {
            self.view_mode = mode;
            events.push(CollectionEvent::ViewModeChanged { mode });
        }
    }
}

/// Collection transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionAction {
    /// Set one filter key.
    SetFilter {
        /// Filter key.
        key: String,
        /// New selection.
        value: FilterSelection,
    },
    /// Advance a filter key to its next available value (wrapping through
    /// "all").
    CycleFilter {
        /// Filter key.
        key: String,
    },
    /// Drop every filter.
    ClearFilters,
    /// Set or clear the sort directly.
    SetSort(Option<SortDescriptor>),
    /// Apply the sort option with this value. Unknown values are ignored.
    SelectSortOption(String),
    /// Advance to the next sort option (wrapping).
    CycleSortOption,
    /// Go to a page (clamped).
    SetPage(usize),
    /// Next page (clamped).
    NextPage,
    /// Previous page (clamped).
    PrevPage,
    /// Change page size. `0` disables pagination.
    SetPageSize(usize),
    /// Set the view mode.
    SetViewMode(ViewMode),
    /// Flip between grid and list.
    ToggleViewMode,
    /// Activate an item. Ids not present in the items are ignored.
    ActivateItem(ItemId),
    /// Restore default filters, sort, page and view mode.
    Reset,
}

/// The selection after `current` when cycling `key` through its available
/// values: Any → first value → ... → last value → Any.
pub fn next_filter_selection(items: &[Item], filters: &FilterSet, key: &str) -> FilterSelection {
    let options = filter_options(items, filters, key);
    let current = filters.selection(key);
    let next = match current.value() {
        None => options.first(),
        Some(value) => options
            .iter()
            .position(|o| o.value == value)
            .and_then(|i| options.get(i + 1)),
    };
    next.map(|o| FilterSelection::Is(o.value.clone()))
        .unwrap_or(FilterSelection::Any)
}

/// Apply a collection action against `items`.
///
/// Returns the new state and the events the transition produced, in order.
pub fn handle_collection_action(
    mut state: CollectionState,
    action: CollectionAction,
    items: &[Item],
) -> (CollectionState, Vec<CollectionEvent>) {
    let mut events = Vec::new();

    match action {
        CollectionAction::SetFilter { key, value } => {
            if state.filters.set(key.clone(), value.clone()) {
                debug!(key = %key, value = ?value, "Filter changed");
                events.push(CollectionEvent::FilterChanged { key, value });
                state.reset_page(&mut events);
            }
        }
        CollectionAction::CycleFilter { key } => {
            let value = next_filter_selection(items, &state.filters, &key);
            return handle_collection_action(
                state,
                CollectionAction::SetFilter { key, value },
                items,
            );
        }
        CollectionAction::ClearFilters => {
            if state.filters.clear() {
                events.push(CollectionEvent::FiltersCleared);
                state.reset_page(&mut events);
            }
        }
        CollectionAction::SetSort(sort) => state.apply_sort(sort, &mut events),
        CollectionAction::SelectSortOption(value) => {
            match state.sort_options.iter().find(|o| o.value == value) {
                Some(option) => {
                    let descriptor = option.descriptor.clone();
                    state.apply_sort(Some(descriptor), &mut events);
                }
                None => trace!(value = %value, "Ignoring unknown sort option"),
            }
        }
        CollectionAction::CycleSortOption => {
            if !state.sort_options.is_empty() {
                let options = &state.sort_options;
                let next = state
                    .selected_sort_option()
                    .and_then(|selected| options.iter().position(|o| o.value == selected.value))
                    .map_or(0, |i| (i + 1) % options.len());
                let descriptor = options[next].descriptor.clone();
                state.apply_sort(Some(descriptor), &mut events);
            }
        }
        CollectionAction::SetPage(page) => state.go_to_page(page, items, &mut events),
        CollectionAction::NextPage => {
            let page = state.page.saturating_add(1);
            state.go_to_page(page, items, &mut events);
        }
        CollectionAction::PrevPage => {
            let page = state.page.saturating_sub(1);
            state.go_to_page(page, items, &mut events);
        }
        CollectionAction::SetPageSize(page_size) => {
            if state.page_size != page_size {
                state.page_size = page_size;
                debug!(page_size, "Page size changed");
                events.push(CollectionEvent::PageSizeChanged { page_size });
                state.reset_page(&mut events);
            }
        }
        CollectionAction::SetViewMode(mode) => state.apply_view_mode(mode, &mut events),
        CollectionAction::ToggleViewMode => {
            let mode = state.view_mode.toggled();
            state.apply_view_mode(mode, &mut events);
        }
        CollectionAction::ActivateItem(id) => {
            if items.iter().any(|item| item.id == id) {
                debug!(id = %id, "Item activated");
                events.push(CollectionEvent::ItemActivated { id });
            } else {
                trace!(id = %id, "Ignoring activation of unknown item");
            }
        }
        CollectionAction::Reset => {
            if state.filters.clear() {
                events.push(CollectionEvent::FiltersCleared);
            }
            let sort = state.default_sort.clone();
            state.apply_sort(sort, &mut events);
            let mode = state.default_view_mode;
            state.apply_view_mode(mode, &mut events);
            state.reset_page(&mut events);
        }
    }

    (state, events)
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
