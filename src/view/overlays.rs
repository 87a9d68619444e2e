//! Lightbox and speed dial widgets.
//!
//! The lightbox story draws a thumbnail grid; while the overlay is open a
//! popup is drawn over it, sized by the zoom level. The speed dial draws a
//! floating button in the bottom-right corner with its actions stacked
//! above it.

use super::constants::{LIGHTBOX_BASE_PERCENT, THUMBNAIL_COLUMNS, THUMBNAIL_HEIGHT};
use super::helpers::{centered_rect, key_value_line, truncate};
use super::styles::GalleryStyles;
use crate::model::Item;
use crate::state::GalleryState;
use crate::stories::fixtures::SPEED_DIAL_ACTIONS;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the lightbox story: thumbnails plus the open overlay, if any.
pub fn render_lightbox(
    frame: &mut Frame,
    area: Rect,
    state: &GalleryState,
    styles: &GalleryStyles,
) {
    let block = Block::default().borders(Borders::ALL).title(" Lightbox ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let images = state.images();
    if images.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No images", styles.muted)).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let columns = THUMBNAIL_COLUMNS;
    let width = inner.width / columns as u16;
    for (index, image) in images.iter().enumerate() {
        let row = (index / columns) as u16;
        let y = inner.y + row * THUMBNAIL_HEIGHT;
        if y + THUMBNAIL_HEIGHT > inner.y + inner.height {
            break;
        }
        let thumb = Rect {
            x: inner.x + (index % columns) as u16 * width,
            y,
            width,
            height: THUMBNAIL_HEIGHT,
        };
        let border = if index == state.image_cursor {
            styles.primary
        } else {
            styles.muted
        };
        let label = truncate(&image.title, usize::from(width.saturating_sub(2)));
        let lines = vec![Line::from(format!("[{}]", index + 1)), Line::from(label)];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border)),
            thumb,
        );
    }

    if let (Some(index), Some(zoom)) = (state.lightbox.index(), state.lightbox.zoom()) {
        if let Some(image) = images.get(index) {
            render_lightbox_popup(frame, area, image, index, images.len(), zoom, styles);
        }
    }
}

/// Popup size for a zoom level, as a percentage of the story area.
pub fn popup_percent(zoom: f32) -> u16 {
    let percent = (f32::from(LIGHTBOX_BASE_PERCENT) * zoom).round();
    percent.clamp(10.0, 100.0) as u16
}

/// Caption lines: `Image i of n`, zoom, media path.
pub fn lightbox_caption(image: &Item, index: usize, total: usize, zoom: f32) -> Vec<Line<'static>> {
    vec![
        Line::from(image.title.clone()),
        Line::from(format!("Image {} of {total}", index + 1)),
        Line::from(format!("Zoom {zoom:.1}x")),
        Line::from(image.media.clone().unwrap_or_default()),
    ]
}

fn render_lightbox_popup(
    frame: &mut Frame,
    area: Rect,
    image: &Item,
    index: usize,
    total: usize,
    zoom: f32,
    styles: &GalleryStyles,
) {
    let percent = popup_percent(zoom);
    let popup = centered_rect(percent, percent, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lightbox_caption(image, index, total, zoom))
            .alignment(Alignment::Center)
            .style(styles.text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.primary)
                    .title(" ← → navigate  + - zoom  esc close "),
            ),
        popup,
    );
}

/// Render the speed dial story.
pub fn render_speed_dial(
    frame: &mut Frame,
    area: Rect,
    state: &GalleryState,
    styles: &GalleryStyles,
) {
    let block = Block::default().borders(Borders::ALL).title(" Speed Dial ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dial = &state.speed_dial;
    let fab = if dial.is_open() { "[×]" } else { "[+]" };
    let fab_area = Rect {
        x: inner.x + inner.width.saturating_sub(5),
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width.min(5),
        height: inner.height.min(1),
    };
    let fab = Span::styled(fab, styles.primary.add_modifier(Modifier::BOLD));
    frame.render_widget(Paragraph::new(fab), fab_area);

    if !dial.is_open() {
        return;
    }
    let lines = speed_dial_lines(state, styles);
    let height = (lines.len() as u16).min(inner.height.saturating_sub(1));
    let width = 12.min(inner.width);
    let menu = Rect {
        x: inner.x + inner.width.saturating_sub(width),
        y: fab_area.y.saturating_sub(height),
        width,
        height,
    };
    frame.render_widget(Clear, menu);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Right), menu);
}

/// Action labels with the highlighted one marked.
pub fn speed_dial_lines(state: &GalleryState, styles: &GalleryStyles) -> Vec<Line<'static>> {
    let highlighted = state.speed_dial.highlighted();
    SPEED_DIAL_ACTIONS
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if highlighted == Some(index) {
                key_value_line("› ", *label, styles.primary, styles.primary)
            } else {
                key_value_line("  ", *label, styles.text, styles.text)
            }
        })
        .collect()
}
