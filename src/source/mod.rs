//! Item sources.
//!
//! Items come either from a JSON catalog file or from the built-in story
//! fixtures. Both end up as a [`Catalog`], which enforces id uniqueness.
//! The infinite feed pulls its batches from a [`FeedSource`].

pub mod catalog;
pub mod feed;
pub mod file;

pub use catalog::Catalog;
pub use feed::{FeedError, FeedResponse, FeedSource, FeedWorker};
pub use file::{load_catalog_file, parse_catalog};
