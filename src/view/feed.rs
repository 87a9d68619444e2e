//! Infinite feed widget.

use super::helpers::truncate;
use super::styles::GalleryStyles;
use crate::state::{FeedLoader, GalleryState};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows available for feed entries inside a story area of `area`.
pub fn feed_viewport_height(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(2))
}

/// Text of the sentinel row below the last loaded item.
pub fn sentinel_label(feed: &FeedLoader) -> &'static str {
    if feed.is_loading() {
        "Loading…"
    } else if feed.is_exhausted() {
        "No more items"
    } else {
        "Scroll for more"
    }
}

/// Visible feed rows followed by the sentinel when it is in range.
pub fn feed_lines(
    state: &GalleryState,
    viewport: usize,
    width: usize,
    styles: &GalleryStyles,
) -> Vec<Line<'static>> {
    let items = state.feed_items();
    let mut lines: Vec<Line<'static>> = items
        .iter()
        .skip(state.feed_scroll)
        .take(viewport)
        .map(|item| {
            Line::from(vec![
                Span::styled(format!("{:<10}", item.title), styles.text),
                Span::styled(
                    truncate(&item.description, width.saturating_sub(10)),
                    styles.muted,
                ),
            ])
        })
        .collect();
    if lines.len() < viewport {
        let style = if state.feed.is_loading() {
            styles.warning
        } else {
            styles.muted
        };
        lines.push(Line::from(Span::styled(sentinel_label(&state.feed), style)));
    }
    lines
}

/// Render the feed story.
pub fn render_feed(frame: &mut Frame, area: Rect, state: &GalleryState, styles: &GalleryStyles) {
    let title = format!(" Infinite Feed ({} loaded) ", state.feed.loaded());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let viewport = feed_viewport_height(area);
    let lines = feed_lines(state, viewport, usize::from(inner.width), styles);
    frame.render_widget(Paragraph::new(lines), inner);
}
