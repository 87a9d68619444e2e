//! Accordion and file-tree widgets.

use super::styles::GalleryStyles;
use crate::state::{ExpansionMode, GalleryState};
use crate::view_state::visible_rows;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn mode_label(mode: ExpansionMode) -> &'static str {
    match mode {
        ExpansionMode::Exclusive => "exclusive",
        ExpansionMode::Inclusive => "inclusive",
    }
}

fn disclosure_marker(expanded: bool) -> &'static str {
    if expanded {
        "▾ "
    } else {
        "▸ "
    }
}

/// Accordion panels with the expanded bodies inline.
pub fn accordion_lines(state: &GalleryState, styles: &GalleryStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, panel) in state.panels().iter().enumerate() {
        let expanded = state.accordion.is_expanded(&panel.id);
        let style = if index == state.accordion_cursor {
            styles.primary
        } else {
            styles.text
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", disclosure_marker(expanded), panel.title),
            style,
        )));
        if expanded {
            lines.push(Line::from(Span::styled(
                format!("    {}", panel.body),
                styles.muted,
            )));
        }
    }
    lines
}

/// Render the accordion story.
pub fn render_accordion(
    frame: &mut Frame,
    area: Rect,
    state: &GalleryState,
    styles: &GalleryStyles,
) {
    let title = format!(" Accordion ({}) ", mode_label(state.accordion.mode()));
    let paragraph = Paragraph::new(accordion_lines(state, styles))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Visible tree rows, indented by depth.
pub fn tree_lines(state: &GalleryState, styles: &GalleryStyles) -> Vec<Line<'static>> {
    visible_rows(state.tree(), &state.file_tree)
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let marker = if row.node.is_branch() {
                disclosure_marker(row.expanded)
            } else {
                "  "
            };
            let style = if index == state.tree_cursor {
                styles.primary
            } else if row.node.is_branch() {
                styles.secondary
            } else {
                styles.text
            };
            Line::from(Span::styled(
                format!("{}{}{}", "  ".repeat(row.depth), marker, row.node.label),
                style,
            ))
        })
        .collect()
}

/// Render the file-tree story.
pub fn render_file_tree(
    frame: &mut Frame,
    area: Rect,
    state: &GalleryState,
    styles: &GalleryStyles,
) {
    let title = format!(" File Tree ({}) ", mode_label(state.file_tree.mode()));
    let paragraph = Paragraph::new(tree_lines(state, styles))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
