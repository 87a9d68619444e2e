//! UI state machines (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! Handlers never fail: out-of-range requests are clamped or ignored.

pub mod collection;
pub mod disclosure;
pub mod expansion;
pub mod feed;
pub mod gallery;
pub mod overlay;
pub mod selection;
pub mod stepper;

// Re-export for convenience
pub use collection::{handle_collection_action, CollectionAction, CollectionState};
pub use disclosure::{Disclosure, SpeedDialState};
pub use expansion::{handle_expansion_action, ExpansionAction, ExpansionMode, ExpansionState};
pub use feed::{CompletionOutcome, FeedLoader, LoadRequest, LoadToken};
pub use gallery::{handle_key_action, GalleryEvent, GallerySettings, GalleryState};
pub use overlay::{
    handle_overlay_action, InvalidZoomConfig, LightboxState, OverlayAction, OverlayState,
    ZoomConfig,
};
pub use selection::SelectionState;
pub use stepper::StepperState;
