//! Gallery frame layout.
//!
//! Pure layout logic: header bar, story sidebar, story area, event log and
//! status bar. The story area is dispatched to the widget of the active
//! story.

use super::constants::{EVENT_LOG_HEIGHT, HEADER_HEIGHT, SIDEBAR_WIDTH, STATUS_BAR_HEIGHT};
use super::styles::GalleryStyles;
use super::{collection, expansion, feed, help, overlays, responsive, tabs};
use crate::model::{
    CollectionEvent, OverlayEvent, SortDirection, SpeedDialEvent, StepperEvent, Theme,
};
use crate::state::{GalleryEvent, GalleryState};
use crate::stories::fixtures::{SPEED_DIAL_ACTIONS, TABS};
use crate::stories::{StoryKind, STORIES};
use crate::view_state::PipelineCache;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

struct GalleryAreas {
    header: Rect,
    sidebar: Rect,
    story: Rect,
    events: Rect,
    status: Rect,
}

fn split_areas(frame_area: Rect) -> GalleryAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(EVENT_LOG_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    GalleryAreas {
        header: rows[0],
        sidebar: body[0],
        story: body[1],
        events: rows[2],
        status: rows[3],
    }
}

/// Area the active story renders into, for a frame of `frame_area`.
pub fn calculate_story_area(frame_area: Rect) -> Rect {
    split_areas(frame_area).story
}

/// Render the whole gallery frame.
pub fn render_layout(
    frame: &mut Frame,
    state: &GalleryState,
    cache: &mut PipelineCache,
    theme: &Theme,
    styles: &GalleryStyles,
) {
    let frame_area = frame.area();
    let areas = split_areas(frame_area);

    render_header(frame, areas.header, state, styles);
    render_sidebar(frame, areas.sidebar, state, styles);
    render_story(
        frame,
        areas.story,
        frame_area.width,
        state,
        cache,
        theme,
        styles,
    );
    render_event_log(frame, areas.events, state, styles);
    render_status_bar(frame, areas.status, state, styles);

    if state.help_visible {
        help::render_help_overlay(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &GalleryState, styles: &GalleryStyles) {
    let story = state.story();
    let line = Line::from(vec![
        Span::styled(" patternkit ", styles.primary),
        Span::styled(format!(" {} ", story.title), styles.text),
        Span::styled(
            format!(" {}/{} ", state.story_index() + 1, STORIES.len()),
            styles.muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &GalleryState, styles: &GalleryStyles) {
    let active = state.story_index();
    let rows: Vec<ListItem> = STORIES
        .iter()
        .enumerate()
        .map(|(index, story)| {
            let style = if index == active {
                styles.primary
            } else {
                styles.text
            };
            let marker = if index == active { "›" } else { " " };
            ListItem::new(Line::from(Span::styled(
                format!("{marker} {} {}", (index + 1) % 10, story.title),
                style,
            )))
        })
        .collect();
    frame.render_widget(
        List::new(rows).block(Block::default().borders(Borders::ALL).title(" Stories ")),
        area,
    );
}

fn render_story(
    frame: &mut Frame,
    area: Rect,
    terminal_width: u16,
    state: &GalleryState,
    cache: &mut PipelineCache,
    theme: &Theme,
    styles: &GalleryStyles,
) {
    match state.story().kind {
        StoryKind::Collection => collection::render_collection(frame, area, state, cache, styles),
        StoryKind::Accordion => expansion::render_accordion(frame, area, state, styles),
        StoryKind::FileTree => expansion::render_file_tree(frame, area, state, styles),
        StoryKind::Tabs => tabs::render_tabs(frame, area, state, styles),
        StoryKind::Stepper => tabs::render_stepper(frame, area, state, styles),
        StoryKind::Lightbox => overlays::render_lightbox(frame, area, state, styles),
        StoryKind::SpeedDial => overlays::render_speed_dial(frame, area, state, styles),
        StoryKind::Feed => feed::render_feed(frame, area, state, styles),
        StoryKind::Masonry => {
            let breakpoint = responsive::breakpoint_for_width(theme, terminal_width);
            responsive::render_masonry(frame, area, state, breakpoint, styles)
        }
        StoryKind::Shell => {
            let breakpoint = responsive::breakpoint_for_width(theme, terminal_width);
            responsive::render_shell(frame, area, state, breakpoint, styles)
        }
    }
}

fn render_event_log(frame: &mut Frame, area: Rect, state: &GalleryState, styles: &GalleryStyles) {
    let capacity = usize::from(area.height.saturating_sub(2));
    let events: Vec<&GalleryEvent> = state.events().collect();
    let skip = events.len().saturating_sub(capacity);
    let lines: Vec<Line> = events[skip..]
        .iter()
        .map(|event| Line::from(Span::styled(describe_event(event), styles.muted)))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Events ")),
        area,
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &GalleryState, styles: &GalleryStyles) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", state.story().hint), styles.text),
        Span::styled(" │ ? help  tab story  q quit", styles.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One-line description of a gallery event for the event log.
pub fn describe_event(event: &GalleryEvent) -> String {
    match event {
        GalleryEvent::Collection(event) => match event {
            CollectionEvent::FilterChanged { key, value } => {
                format!("filter {key} = {}", value.value().unwrap_or("any"))
            }
            CollectionEvent::FiltersCleared => "filters cleared".to_string(),
            CollectionEvent::SortChanged { sort: Some(sort) } => {
                let direction = match sort.direction {
                    SortDirection::Asc => "asc",
                    SortDirection::Desc => "desc",
                };
                format!("sort {} {direction}", sort.key)
            }
            CollectionEvent::SortChanged { sort: None } => "sort cleared".to_string(),
            CollectionEvent::PageChanged { page } => format!("page {page}"),
            CollectionEvent::PageSizeChanged { page_size: 0 } => "page size all".to_string(),
            CollectionEvent::PageSizeChanged { page_size } => format!("page size {page_size}"),
            CollectionEvent::ViewModeChanged { mode } => format!("view {mode}"),
            CollectionEvent::ItemActivated { id } => format!("activated {id}"),
        },
        GalleryEvent::Expansion { id, expanded: true } => format!("expanded {id}"),
        GalleryEvent::Expansion { id, expanded: false } => format!("collapsed {id}"),
        GalleryEvent::TabChanged { index } => {
            format!("tab {}", TABS.get(*index).copied().unwrap_or("?"))
        }
        GalleryEvent::Stepper(StepperEvent::StepChanged { index }) => {
            format!("step {}", index + 1)
        }
        GalleryEvent::Stepper(StepperEvent::Finished) => "stepper finished".to_string(),
        GalleryEvent::Overlay(event) => match event {
            OverlayEvent::Opened { index } => format!("lightbox opened on {}", index + 1),
            OverlayEvent::Navigated { index } => format!("lightbox showing {}", index + 1),
            OverlayEvent::Zoomed { zoom } => format!("zoom {zoom:.1}x"),
            OverlayEvent::Closed => "lightbox closed".to_string(),
        },
        GalleryEvent::SpeedDial(event) => match event {
            SpeedDialEvent::Opened => "speed dial opened".to_string(),
            SpeedDialEvent::Closed => "speed dial closed".to_string(),
            SpeedDialEvent::ActionChosen { index } => format!(
                "action {}",
                SPEED_DIAL_ACTIONS.get(*index).copied().unwrap_or("?")
            ),
        },
        GalleryEvent::FeedLoaded { added, total } => {
            format!("loaded {added} posts ({total} total)")
        }
        GalleryEvent::DrawerToggled { open: true } => "drawer opened".to_string(),
        GalleryEvent::DrawerToggled { open: false } => "drawer closed".to_string(),
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
