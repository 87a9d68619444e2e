//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

use std::time::Duration;

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the event log panel in lines (border + entries).
pub const EVENT_LOG_HEIGHT: u16 = 6;

/// Width of the story sidebar in columns.
pub const SIDEBAR_WIDTH: u16 = 22;

/// Height of one card in the collection grid.
pub const CARD_HEIGHT: u16 = 4;

/// Height of one lightbox thumbnail.
pub const THUMBNAIL_HEIGHT: u16 = 5;

/// Thumbnails per row in the lightbox story.
pub const THUMBNAIL_COLUMNS: usize = 3;

/// Assumed pixel width of one terminal cell, used to map the terminal
/// width onto theme breakpoints.
pub const CELL_WIDTH_PX: u32 = 10;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Lightbox popup size at the minimum zoom level, in percent of the area.
pub const LIGHTBOX_BASE_PERCENT: u16 = 40;

/// Event loop poll interval.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Simulated network delay for feed batches.
pub const FEED_DELAY: Duration = Duration::from_millis(400);
