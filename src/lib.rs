//! patternkit
//!
//! Headless state machines for common UI patterns: a filterable, sortable,
//! paginated collection view, expansion and selection holders, an overlay
//! controller, a stepper, disclosures, an infinite-scroll loader, and
//! masonry and responsive shell layouts.
//!
//! The library is split Pure Core / Impure Shell: `model`, `state` and
//! `view_state` never touch the terminal; `view` and the `patternkit`
//! binary drive them from a ratatui gallery.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod stories;
pub mod view;
pub mod view_state;
