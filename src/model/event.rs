//! Outbound events emitted by state transitions.
//!
//! These replace `onX` callback props: a reducer returns the events its
//! transition produced and the host decides what to do with them.

use crate::model::{FilterSelection, ItemId, SortDescriptor, ViewMode};

/// Events emitted by the collection reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionEvent {
    /// A filter key took a new selection (`onFilterChange`).
    FilterChanged {
        /// Filter key.
        key: String,
        /// New selection.
        value: FilterSelection,
    },
    /// Every filter was cleared at once.
    FiltersCleared,
    /// Sort changed (`onSortChange`). `None` means original order.
    SortChanged {
        /// New descriptor.
        sort: Option<SortDescriptor>,
    },
    /// Current page changed (1-indexed).
    PageChanged {
        /// New page.
        page: usize,
    },
    /// Page size changed. `0` disables pagination.
    PageSizeChanged {
        /// New page size.
        page_size: usize,
    },
    /// View mode toggled.
    ViewModeChanged {
        /// New mode.
        mode: ViewMode,
    },
    /// An item was activated (`onItemClick`).
    ItemActivated {
        /// Id of the activated item.
        id: ItemId,
    },
}

/// Events emitted by the overlay (lightbox) controller.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// Overlay opened on an index.
    Opened {
        /// Focused index.
        index: usize,
    },
    /// Focus moved while open.
    Navigated {
        /// New focused index.
        index: usize,
    },
    /// Zoom level changed.
    Zoomed {
        /// New zoom level.
        zoom: f32,
    },
    /// Overlay closed.
    Closed,
}

/// Events emitted by the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperEvent {
    /// Active step changed.
    StepChanged {
        /// New active step.
        index: usize,
    },
    /// The last step was completed.
    Finished,
}

/// Events emitted by the speed dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedDialEvent {
    /// The dial opened.
    Opened,
    /// The dial closed without choosing.
    Closed,
    /// An action was chosen; the dial closes.
    ActionChosen {
        /// Index of the chosen action.
        index: usize,
    },
}
