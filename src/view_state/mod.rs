//! View-state layer - pure derivations from state to what is shown
//!
//! Nothing in this module mutates state. Reducers in [`crate::state`] and
//! widgets in [`crate::view`] call these to decide what is visible and where
//! it goes.
//!
//! # Module Structure
//!
//! - `collection`: filter → sort → paginate pipeline, page metadata, filter options
//! - `cache`: memoized pipeline ordering keyed on query and data revision
//! - `tree`: expansion set → ordered visible tree rows
//! - `masonry`: shortest-column-first placement
//! - `shell`: responsive sidebar/content/detail layout per breakpoint
//! - `sentinel`: infinite-scroll sentinel proximity

pub mod cache;
pub mod collection;
pub mod masonry;
pub mod sentinel;
pub mod shell;
pub mod tree;

pub use cache::PipelineCache;
pub use collection::{
    derive_view, filter_options, CollectionQuery, CollectionView, FilterOption, PageInfo,
};
pub use masonry::{columns_for, masonry_layout, MasonryLayout, MasonryPlacement};
pub use sentinel::sentinel_in_view;
pub use shell::{shell_layout, shell_layout_for_width, ShellLayout, ShellPanel, SidebarMode};
pub use tree::{visible_rows, TreeNode, TreeRow};
