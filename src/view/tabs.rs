//! Tab strip and stepper widgets.
//!
//! Both are single-selection patterns: the tab strip highlights the active
//! tab with ratatui's Tabs widget; the stepper draws one marker per step.

use super::styles::GalleryStyles;
use crate::state::{GalleryState, StepperState};
use crate::stories::fixtures::{STEPS, TABS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the tab strip with the active tab's panel below it.
///
/// # Behavior
/// - The active tab is highlighted; with no active tab nothing is
/// - The panel shows the active tab's label, or nothing when none is active
pub fn render_tabs(frame: &mut Frame, area: Rect, state: &GalleryState, styles: &GalleryStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = TABS.iter().map(|label| Line::from(*label)).collect();
    let mut tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Tabs "))
        .style(styles.text);

    // Tabs has no "no selection" state; only highlight a valid index
    let active = state.tabs.active().filter(|&index| index < TABS.len());
    if let Some(index) = active {
        tabs = tabs.highlight_style(styles.primary).select(index);
    }
    frame.render_widget(tabs, chunks[0]);

    let body = active
        .and_then(|index| TABS.get(index))
        .map(|label| format!("{label} panel"))
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(body, styles.text))
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );
}

fn step_marker(stepper: &StepperState, step: usize) -> &'static str {
    if stepper.is_completed(step) {
        "✓"
    } else if stepper.is_skipped(step) {
        "↷"
    } else if stepper.active() == Some(step) {
        "●"
    } else {
        "○"
    }
}

/// One line per step: marker, label, optional tag.
pub fn step_lines(state: &GalleryState, styles: &GalleryStyles) -> Vec<Line<'static>> {
    let stepper = &state.stepper;
    STEPS
        .iter()
        .enumerate()
        .map(|(step, label)| {
            let mut style = if stepper.active() == Some(step) {
                styles.primary
            } else if stepper.is_completed(step) {
                styles.success
            } else if stepper.is_reachable(step) {
                styles.text
            } else {
                styles.muted
            };
            if step == state.step_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let mut spans = vec![Span::styled(
                format!("{} {}. {}", step_marker(stepper, step), step + 1, label),
                style,
            )];
            if stepper.is_optional(step) {
                spans.push(Span::styled(" (optional)", styles.muted));
            }
            Line::from(spans)
        })
        .collect()
}

/// `Step 2 of 4 · linear`, or `All steps complete` once finished.
pub fn stepper_status(stepper: &StepperState) -> String {
    let mode = if stepper.is_linear() {
        "linear"
    } else {
        "non-linear"
    };
    match stepper.active() {
        _ if stepper.is_finished() => format!("All steps complete · {mode}"),
        Some(step) => format!("Step {} of {} · {mode}", step + 1, stepper.step_count()),
        None => format!("No steps · {mode}"),
    }
}

/// Render the stepper story.
pub fn render_stepper(frame: &mut Frame, area: Rect, state: &GalleryState, styles: &GalleryStyles) {
    let block = Block::default().borders(Borders::ALL).title(" Stepper ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let status_style = if state.stepper.is_finished() {
        styles.success
    } else {
        styles.secondary
    };
    frame.render_widget(
        Paragraph::new(Span::styled(stepper_status(&state.stepper), status_style)),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(step_lines(state, styles)), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeyAction;
    use crate::state::{handle_key_action, GallerySettings};
    use crate::stories::{find_story, fixtures};
    use crate::view::helpers::buffer_to_string;
    use ratatui::{backend::TestBackend, Terminal};

    fn on_story(id: &str) -> GalleryState {
        let catalog = fixtures::demo_catalog().expect("fixture builds");
        let mut state =
            GalleryState::new(catalog, GallerySettings::default()).expect("gallery builds");
        let (index, _) = find_story(id).expect("story exists");
        state.select_story(index);
        state
    }

    type RenderFn = fn(&mut Frame, Rect, &GalleryState, &GalleryStyles);

    fn draw(state: &GalleryState, render: RenderFn) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("test terminal");
        let styles = GalleryStyles::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, state, &styles)
            })
            .expect("draw");
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn tabs_show_every_label_and_active_panel() {
        let state = handle_key_action(on_story("tabs"), KeyAction::Right);
        let rendered = draw(&state, render_tabs);
        for label in TABS {
            assert!(rendered.contains(label), "missing tab {label}");
        }
        assert!(rendered.contains("Specs panel"));
    }

    #[test]
    fn fresh_stepper_is_on_first_step() {
        let state = on_story("stepper");
        assert_eq!(stepper_status(&state.stepper), "Step 1 of 4 · linear");
        let rendered = draw(&state, render_stepper);
        assert!(rendered.contains("● 1. Account"));
        assert!(rendered.contains("Preferences (optional)"));
    }

    #[test]
    fn completed_and_skipped_steps_get_markers() {
        let mut state = on_story("stepper");
        for action in [KeyAction::Right, KeyAction::Right, KeyAction::Skip] {
            state = handle_key_action(state, action);
        }
        let rendered = draw(&state, render_stepper);
        assert!(rendered.contains("✓ 1. Account"));
        assert!(rendered.contains("↷ 3. Preferences"));
        assert!(rendered.contains("Step 4 of 4"));
    }

    #[test]
    fn finishing_reports_completion() {
        let mut state = on_story("stepper");
        for _ in 0..3 {
            state = handle_key_action(state, KeyAction::Right);
        }
        state.step_cursor = 3;
        let state = handle_key_action(state, KeyAction::Activate);
        insta::assert_snapshot!(stepper_status(&state.stepper), @"All steps complete · linear");
    }
}
