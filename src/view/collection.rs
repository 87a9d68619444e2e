//! Card catalog widget: filter bar, grid or list, page footer.

use super::constants::CARD_HEIGHT;
use super::helpers::truncate;
use super::styles::GalleryStyles;
use crate::model::{Item, ViewMode};
use crate::state::gallery::GRID_COLUMNS;
use crate::state::GalleryState;
use crate::view_state::{filter_options, CollectionView, PageInfo, PipelineCache};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Message shown when filters exclude every item.
pub const EMPTY_MESSAGE: &str = "No items match the current filters";

/// Render the collection story into `area`.
pub fn render_collection(
    frame: &mut Frame,
    area: Rect,
    state: &GalleryState,
    cache: &mut PipelineCache,
    styles: &GalleryStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Card Catalog ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let items = state.catalog().items();
    let view = cache.view(items, 0, &state.collection.query());

    frame.render_widget(Paragraph::new(filter_bar(state, styles)), chunks[0]);

    if view.page.is_empty() {
        let empty = Paragraph::new(Span::styled(EMPTY_MESSAGE, styles.error))
            .alignment(Alignment::Center);
        frame.render_widget(empty, centered_line(chunks[1]));
    } else {
        match state.collection.view_mode() {
            ViewMode::Grid => render_grid(frame, chunks[1], &view, state.collection_cursor, styles),
            ViewMode::List => render_list(frame, chunks[1], &view, state.collection_cursor, styles),
        }
    }

    frame.render_widget(Paragraph::new(page_footer(&view.page, styles)), chunks[2]);
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

/// Two lines: every filter control with its selection, then the option
/// list for the focused filter.
pub fn filter_bar(state: &GalleryState, styles: &GalleryStyles) -> Vec<Line<'static>> {
    let collection = &state.collection;
    let mut controls = Vec::new();
    for (index, definition) in collection.filter_definitions().iter().enumerate() {
        let selection = collection.filters().selection(&definition.key);
        let value = selection.value().unwrap_or("Any").to_string();
        let label_style = if index == state.filter_key_index {
            styles.primary
        } else {
            styles.text
        };
        controls.push(Span::styled(format!("{}: ", definition.label), label_style));
        controls.push(Span::styled(value, styles.secondary));
        controls.push(Span::raw("  "));
    }

    let sort_label = collection
        .selected_sort_option()
        .map(|option| option.label.clone())
        .unwrap_or_else(|| "Original order".to_string());
    controls.push(Span::styled("Sort: ", styles.text));
    controls.push(Span::styled(sort_label, styles.secondary));
    controls.push(Span::raw("  "));
    controls.push(Span::styled(
        format!("View: {}", collection.view_mode()),
        styles.muted,
    ));

    let mut options = vec![Span::styled("  options: ", styles.muted)];
    if let Some(key) = state.current_filter_key() {
        let selected = collection.filters().selection(key);
        for option in filter_options(state.catalog().items(), collection.filters(), key) {
            let style = if selected.value() == Some(option.value.as_str()) {
                styles.primary
            } else {
                styles.muted
            };
            options.push(Span::styled(
                format!("{} ({})  ", option.value, option.count),
                style,
            ));
        }
    }

    vec![Line::from(controls), Line::from(options)]
}

/// `Page 2/3  9-16 of 24  ‹ prev  next ›`
pub fn page_footer(page: &PageInfo, styles: &GalleryStyles) -> Line<'static> {
    let nav = |label: &'static str, enabled: bool| {
        Span::styled(label, if enabled { styles.text } else { styles.muted })
    };
    let size = if page.page_size == 0 {
        "all".to_string()
    } else {
        page.page_size.to_string()
    };
    Line::from(vec![
        Span::styled(
            format!("Page {}/{}  ", page.page, page.total_pages),
            styles.text,
        ),
        Span::styled(format!("{}  ", page.range_label()), styles.secondary),
        Span::styled(format!("size {size}  "), styles.muted),
        nav("‹ prev", page.has_prev()),
        Span::raw("  "),
        nav("next ›", page.has_next()),
    ])
}

fn card_detail(item: &Item) -> String {
    ["category", "price"]
        .iter()
        .filter_map(|key| item.field(key).map(|field| field.display()))
        .collect::<Vec<_>>()
        .join(" · ")
}

fn card_lines(item: &Item, width: usize) -> Vec<Line<'static>> {
    vec![
        Line::from(truncate(&item.title, width)),
        Line::from(truncate(&card_detail(item), width)),
    ]
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    view: &CollectionView<'_>,
    cursor: usize,
    styles: &GalleryStyles,
) {
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let cursor_row = cursor / GRID_COLUMNS;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);
    let card_width = area.width / GRID_COLUMNS as u16;

    for (index, item) in view.items.iter().enumerate() {
        let row = index / GRID_COLUMNS;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let column = (index % GRID_COLUMNS) as u16;
        let card = Rect {
            x: area.x + column * card_width,
            y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT.min(area.height),
        };
        let border_style = if index == cursor {
            styles.primary
        } else {
            styles.muted
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let width = usize::from(card_width.saturating_sub(2));
        frame.render_widget(
            Paragraph::new(card_lines(item, width))
                .style(styles.text)
                .block(block),
            card,
        );
    }
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    view: &CollectionView<'_>,
    cursor: usize,
    styles: &GalleryStyles,
) {
    let width = usize::from(area.width);
    let rows: Vec<ListItem> = view
        .items
        .iter()
        .map(|item| {
            let row = format!("{}  ·  {}", item.title, card_detail(item));
            ListItem::new(Line::from(truncate(&row, width)))
        })
        .collect();

    let list = List::new(rows)
        .style(styles.text)
        .highlight_style(styles.primary.add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}
