//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Gallery",
        &[
            ("Tab/Shift+Tab", "Next / previous story"),
            ("1-9", "Jump to story by number"),
        ],
    ),
    (
        "Movement",
        &[
            ("h j k l/arrows", "Move focus"),
            ("Enter", "Activate / open / jump"),
            ("Space", "Toggle"),
            ("Esc", "Close / dismiss"),
        ],
    ),
    (
        "Card Catalog",
        &[
            ("f / F", "Cycle filter value / next filter"),
            ("x", "Clear filters"),
            ("s", "Cycle sort"),
            ("v", "Grid / list"),
            ("n / N", "Next / previous page"),
            ("p", "Cycle page size"),
        ],
    ),
    (
        "Patterns",
        &[
            ("m", "Exclusive/inclusive or linear/non-linear"),
            ("S", "Skip optional step"),
            ("r", "Reset story"),
        ],
    ),
    (
        "Lightbox (while open)",
        &[
            ("←/→", "Previous / next image (wraps)"),
            ("+ / -", "Zoom in / out"),
            ("0", "Reset zoom"),
            ("Esc", "Close"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        super::styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn build_help_content() -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    for (index, (category, entries)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(empty_line());
        }
        let header = Span::styled(*category, super::styles::SECTION_HEADER);
        lines.push(Line::from(header));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<16}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
