//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod event;
pub mod filter;
pub mod identifiers;
pub mod item;
pub mod key_action;
pub mod sort;
pub mod theme;
pub mod view_mode;

// Re-export for convenience
pub use error::{AppError, CatalogError};
pub use event::{CollectionEvent, OverlayEvent, SpeedDialEvent, StepperEvent};
pub use filter::{FilterCriterion, FilterDefinition, FilterSelection, FilterSet};
pub use identifiers::{InvalidItemId, InvalidNodeId, ItemId, NodeId};
pub use item::{AttrValue, FieldValue, Item};
pub use key_action::KeyAction;
pub use sort::{SortDescriptor, SortDirection, SortOption};
pub use theme::{parse_hex_color, Breakpoint, Breakpoints, Theme};
pub use view_mode::ViewMode;
