//! Masonry grid and responsive shell widgets.
//!
//! Both take a breakpoint classified from the full terminal width (see
//! [`breakpoint_for_width`]), not from the story area.

use super::constants::CELL_WIDTH_PX;
use super::helpers::truncate;
use super::styles::GalleryStyles;
use crate::model::{Breakpoint, Theme};
use crate::state::GalleryState;
use crate::stories::fixtures::masonry_heights;
use crate::view_state::{columns_for, masonry_layout, shell_layout, ShellPanel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Tiles shown by the masonry story.
pub const MASONRY_TILES: usize = 12;

/// Breakpoint for a terminal `columns` cells wide.
pub fn breakpoint_for_width(theme: &Theme, columns: u16) -> Breakpoint {
    theme
        .breakpoints
        .classify(u32::from(columns).saturating_mul(CELL_WIDTH_PX))
}

/// Render the masonry story.
pub fn render_masonry(
    frame: &mut Frame,
    area: Rect,
    state: &GalleryState,
    breakpoint: Breakpoint,
    styles: &GalleryStyles,
) {
    let columns = columns_for(breakpoint);
    let title = format!(" Masonry ({breakpoint}, {columns} columns) ");
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let all = state.catalog().items();
    let items = &all[..all.len().min(MASONRY_TILES)];
    let heights = masonry_heights(items);
    let layout = masonry_layout(&heights, columns, 0);
    let width = inner.width / columns as u16;

    for (item, placement) in items.iter().zip(&layout.placements) {
        let Ok(top) = u16::try_from(placement.top) else {
            continue;
        };
        if top >= inner.height {
            continue;
        }
        let height = u16::try_from(placement.height)
            .unwrap_or(u16::MAX)
            .min(inner.height - top);
        let tile = Rect {
            x: inner.x + placement.column as u16 * width,
            y: inner.y + top,
            width,
            height,
        };
        frame.render_widget(
            Paragraph::new(Line::from(truncate(
                &item.title,
                usize::from(width.saturating_sub(2)),
            )))
            .style(styles.text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.muted),
            ),
            tile,
        );
    }
}

fn panel_title(panel: ShellPanel) -> &'static str {
    match panel {
        ShellPanel::Sidebar => " Navigation ",
        ShellPanel::Content => " Content ",
        ShellPanel::Detail => " Detail ",
    }
}

fn panel_constraint(panel: ShellPanel) -> Constraint {
    match panel {
        ShellPanel::Sidebar => Constraint::Length(18),
        ShellPanel::Content => Constraint::Min(10),
        ShellPanel::Detail => Constraint::Length(24),
    }
}

fn panel_lines(
    panel: ShellPanel,
    breakpoint: Breakpoint,
    columns: usize,
    styles: &GalleryStyles,
) -> Vec<Line<'static>> {
    match panel {
        ShellPanel::Sidebar => ["Home", "Catalog", "Orders", "Settings"]
            .iter()
            .map(|entry| Line::from(Span::styled(*entry, styles.text)))
            .collect(),
        ShellPanel::Content => vec![
            Line::from(Span::styled(
                format!("Breakpoint: {breakpoint}"),
                styles.secondary,
            )),
            Line::from(Span::styled(
                format!("Grid columns: {columns}"),
                styles.text,
            )),
        ],
        ShellPanel::Detail => vec![Line::from(Span::styled("Inspector", styles.muted))],
    }
}

/// Render the responsive shell story.
///
/// Permanent sidebars and the detail panel sit beside the content. A
/// temporary sidebar is drawn over the content while the drawer is open.
pub fn render_shell(
    frame: &mut Frame,
    area: Rect,
    state: &GalleryState,
    breakpoint: Breakpoint,
    styles: &GalleryStyles,
) {
    let layout = shell_layout(breakpoint);
    let panels = layout.panels(false);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(panels.iter().map(|panel| panel_constraint(*panel)))
        .split(area);

    for (panel, chunk) in panels.iter().zip(chunks.iter()) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(panel_title(*panel));
        if *panel == ShellPanel::Content && layout.has_drawer() {
            block = block.title(" [space] menu ");
        }
        frame.render_widget(
            Paragraph::new(panel_lines(*panel, breakpoint, layout.columns, styles)).block(block),
            *chunk,
        );
    }

    if layout.has_drawer() && state.drawer.is_open() {
        let drawer = Rect {
            width: area.width.min(18),
            ..area
        };
        frame.render_widget(Clear, drawer);
        let lines = panel_lines(ShellPanel::Sidebar, breakpoint, layout.columns, styles);
        let menu = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.primary)
            .title(panel_title(ShellPanel::Sidebar));
        frame.render_widget(Paragraph::new(lines).block(menu), drawer);
    }
}
