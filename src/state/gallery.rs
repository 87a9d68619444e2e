//! Gallery application state and key routing.
//!
//! GalleryState is the root state of the story gallery. It owns one state
//! machine per story and dispatches [`KeyAction`]s to the machine of the
//! active story.
//!
//! # Mount lifecycle
//!
//! Switching stories unmounts the story being left and mounts the new one
//! with fresh state. Unmounting the feed tears its loader down so that a
//! completion still in flight is discarded when it arrives.
//!
//! # Commands
//!
//! Feed load requests are the only side effect a transition can ask for.
//! They are queued on the state and drained by the event loop with
//! [`GalleryState::take_load_request`].

use crate::model::{
    CatalogError, CollectionEvent, Item, KeyAction, NodeId, OverlayEvent, SpeedDialEvent,
    StepperEvent, ViewMode,
};
use crate::source::Catalog;
use crate::state::collection::{handle_collection_action, CollectionAction, CollectionState};
use crate::state::disclosure::{Disclosure, SpeedDialState};
use crate::state::expansion::{ExpansionMode, ExpansionState};
use crate::state::feed::{CompletionOutcome, FeedLoader, LoadRequest, LoadToken};
use crate::state::overlay::{handle_overlay_action, LightboxState, OverlayAction, ZoomConfig};
use crate::state::selection::SelectionState;
use crate::state::stepper::StepperState;
use crate::stories::fixtures::{self, FeedBatch, Panel};
use crate::stories::{Story, StoryKind, STORIES};
use crate::view_state::{sentinel_in_view, visible_rows, TreeNode};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Page sizes cycled by [`KeyAction::CyclePageSize`]. `0` shows everything.
pub const PAGE_SIZES: [usize; 4] = [4, 8, 12, 0];

/// Cards per row in grid mode.
pub const GRID_COLUMNS: usize = 4;

/// Rows before the end of the feed at which the sentinel counts as visible.
pub const SENTINEL_THRESHOLD: usize = 2;

const MAX_EVENTS: usize = 20;

/// Settings the gallery takes from resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySettings {
    /// Initial collection page size.
    pub page_size: usize,
    /// Initial collection view mode.
    pub view_mode: ViewMode,
    /// Lightbox zoom bounds.
    pub zoom: ZoomConfig,
    /// Feed batch size.
    pub feed_batch_size: usize,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            page_size: 8,
            view_mode: ViewMode::Grid,
            zoom: ZoomConfig::default(),
            feed_batch_size: 6,
        }
    }
}

/// Something a story's state machine reported, shown in the event log.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    /// Collection reducer output.
    Collection(CollectionEvent),
    /// An accordion panel or tree node changed.
    Expansion {
        /// Node id.
        id: NodeId,
        /// New state.
        expanded: bool,
    },
    /// The active tab changed.
    TabChanged {
        /// New tab.
        index: usize,
    },
    /// Stepper output.
    Stepper(StepperEvent),
    /// Lightbox output.
    Overlay(OverlayEvent),
    /// Speed dial output.
    SpeedDial(SpeedDialEvent),
    /// A feed batch was appended.
    FeedLoaded {
        /// Items appended.
        added: usize,
        /// Items now loaded.
        total: usize,
    },
    /// The shell drawer opened or closed.
    DrawerToggled {
        /// New state.
        open: bool,
    },
}

/// Root gallery state.
#[derive(Debug, Clone)]
pub struct GalleryState {
    stories: SelectionState,
    settings: GallerySettings,
    catalog: Catalog,

    /// Whether the help overlay is shown.
    pub help_visible: bool,
    /// Set when the user asked to exit.
    pub should_quit: bool,

    /// Collection selections.
    pub collection: CollectionState,
    /// Focused card within the current page.
    pub collection_cursor: usize,
    /// Filter control the filter-cycle key acts on.
    pub filter_key_index: usize,

    panels: Vec<Panel>,
    /// Accordion expansion (exclusive by default).
    pub accordion: ExpansionState,
    /// Focused accordion panel.
    pub accordion_cursor: usize,

    tree: Vec<TreeNode>,
    /// File-tree expansion (inclusive by default).
    pub file_tree: ExpansionState,
    /// Focused visible tree row.
    pub tree_cursor: usize,

    /// Active tab.
    pub tabs: SelectionState,

    /// Stepper progress.
    pub stepper: StepperState,
    /// Step a jump would target.
    pub step_cursor: usize,

    images: Vec<Item>,
    /// Focused thumbnail while the lightbox is closed.
    pub image_cursor: usize,
    /// Lightbox overlay.
    pub lightbox: LightboxState,

    /// Speed dial.
    pub speed_dial: SpeedDialState,

    /// Feed loader.
    pub feed: FeedLoader,
    feed_items: Vec<Item>,
    /// First visible feed row.
    pub feed_scroll: usize,
    feed_viewport: usize,
    pending_load: Option<LoadRequest>,

    /// Shell navigation drawer.
    pub drawer: Disclosure,

    events: VecDeque<GalleryEvent>,
}

impl GalleryState {
    /// Gallery over `catalog`, starting on the first story.
    pub fn new(catalog: Catalog, settings: GallerySettings) -> Result<Self, CatalogError> {
        let images = fixtures::demo_images(&catalog);
        let mut feed = FeedLoader::new(settings.feed_batch_size);
        feed.teardown();

        let mut state = Self {
            stories: SelectionState::new(STORIES.len()),
            collection: new_collection(&settings),
            lightbox: LightboxState::new(images.len(), settings.zoom),
            speed_dial: SpeedDialState::new(fixtures::SPEED_DIAL_ACTIONS.len()),
            settings,
            catalog,
            help_visible: false,
            should_quit: false,
            collection_cursor: 0,
            filter_key_index: 0,
            panels: fixtures::demo_panels()?,
            accordion: ExpansionState::new(ExpansionMode::Exclusive),
            accordion_cursor: 0,
            tree: fixtures::demo_tree()?,
            file_tree: ExpansionState::new(ExpansionMode::Inclusive),
            tree_cursor: 0,
            tabs: SelectionState::new(fixtures::TABS.len()),
            stepper: new_stepper(),
            step_cursor: 0,
            images,
            image_cursor: 0,
            feed,
            feed_items: Vec::new(),
            feed_scroll: 0,
            feed_viewport: 0,
            pending_load: None,
            drawer: Disclosure::new(),
            events: VecDeque::with_capacity(MAX_EVENTS),
        };
        let kind = state.story().kind;
        state.mount(kind);
        Ok(state)
    }

    /// Active story.
    pub fn story(&self) -> &'static Story {
        let index = self.stories.active().unwrap_or(0);
        STORIES.get(index).unwrap_or(&STORIES[0])
    }

    /// Index of the active story in [`STORIES`].
    pub fn story_index(&self) -> usize {
        self.stories.active().unwrap_or(0)
    }

    /// Switch to story `index`. Out-of-range indices are ignored.
    pub fn select_story(&mut self, index: usize) {
        let previous = self.story().kind;
        if self.stories.select(index) {
            self.unmount(previous);
            let story = self.story();
            info!(story = story.id, "Story selected");
            self.mount(story.kind);
        }
    }

    /// Backing catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Accordion panels.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// File-tree roots.
    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    /// Lightbox images.
    pub fn images(&self) -> &[Item] {
        &self.images
    }

    /// Feed items loaded so far.
    pub fn feed_items(&self) -> &[Item] {
        &self.feed_items
    }

    /// Recent events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &GalleryEvent> {
        self.events.iter()
    }

    /// Most recent event.
    pub fn last_event(&self) -> Option<&GalleryEvent> {
        self.events.back()
    }

    /// Filter key the filter-cycle key acts on.
    pub fn current_filter_key(&self) -> Option<&str> {
        self.collection
            .filter_definitions()
            .get(self.filter_key_index)
            .map(|d| d.key.as_str())
    }

    /// Whether the open lightbox captures keyboard input.
    pub fn captures_overlay_keys(&self) -> bool {
        self.story().kind == StoryKind::Lightbox && self.lightbox.is_open()
    }

    /// Apply a lightbox transition and record its event.
    pub fn apply_overlay_action(&mut self, action: OverlayAction) {
        let (lightbox, event) = handle_overlay_action(self.lightbox.clone(), action);
        self.lightbox = lightbox;
        if let Some(event) = event {
            if let OverlayEvent::Opened { index } | OverlayEvent::Navigated { index } = &event {
                self.image_cursor = *index;
            }
            self.record(GalleryEvent::Overlay(event));
        }
    }

    /// Report the feed viewport height and re-check the sentinel.
    pub fn set_feed_viewport(&mut self, height: usize) {
        self.feed_viewport = height;
        self.check_sentinel();
    }

    /// Drain the queued feed load request, if any.
    pub fn take_load_request(&mut self) -> Option<LoadRequest> {
        self.pending_load.take()
    }

    /// Apply a finished feed load. Stale or post-teardown results are
    /// dropped by the loader.
    pub fn apply_feed_batch(&mut self, token: LoadToken, batch: FeedBatch) -> CompletionOutcome {
        let outcome = self.feed.complete(token, batch.items.len(), batch.has_more);
        if let CompletionOutcome::Applied { added } = outcome {
            self.feed_items.extend(batch.items);
            let total = self.feed_items.len();
            self.record(GalleryEvent::FeedLoaded { added, total });
            self.check_sentinel();
        }
        outcome
    }

    /// A feed load failed; the next sentinel edge retries.
    pub fn fail_feed_load(&mut self, token: LoadToken) {
        self.feed.fail(token);
        self.check_sentinel();
    }

    fn record(&mut self, event: GalleryEvent) {
        debug!(event = ?event, "Gallery event");
        if self.events.len() == MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn mount(&mut self, kind: StoryKind) {
        match kind {
            StoryKind::Collection => {
                self.collection = new_collection(&self.settings);
                self.collection_cursor = 0;
                self.filter_key_index = 0;
            }
            StoryKind::Accordion => {
                self.accordion = ExpansionState::new(ExpansionMode::Exclusive);
                self.accordion_cursor = 0;
            }
            StoryKind::FileTree => {
                self.file_tree = ExpansionState::new(ExpansionMode::Inclusive);
                self.tree_cursor = 0;
            }
            StoryKind::Tabs => self.tabs = SelectionState::new(fixtures::TABS.len()),
            StoryKind::Stepper => {
                self.stepper = new_stepper();
                self.step_cursor = 0;
            }
            StoryKind::Lightbox => {
                self.lightbox = LightboxState::new(self.images.len(), self.settings.zoom);
                self.image_cursor = 0;
            }
            StoryKind::SpeedDial => {
                self.speed_dial = SpeedDialState::new(fixtures::SPEED_DIAL_ACTIONS.len());
            }
            StoryKind::Feed => {
                self.feed.remount();
                self.feed_items.clear();
                self.feed_scroll = 0;
                self.pending_load = None;
                self.check_sentinel();
            }
            StoryKind::Masonry | StoryKind::Shell => self.drawer = Disclosure::new(),
        }
    }

    fn unmount(&mut self, kind: StoryKind) {
        if kind == StoryKind::Feed {
            self.feed.teardown();
            self.pending_load = None;
        }
    }

    fn check_sentinel(&mut self) {
        if !self.feed.is_mounted() {
            return;
        }
        // +1 for the sentinel row itself
        let content = self.feed_items.len() + 1;
        let visible = sentinel_in_view(
            self.feed_scroll,
            self.feed_viewport,
            content,
            SENTINEL_THRESHOLD,
        );
        if let Some(request) = self.feed.on_sentinel(visible) {
            self.pending_load = Some(request);
        }
    }

    fn collection_action(&mut self, action: CollectionAction) {
        let (collection, events) =
            handle_collection_action(self.collection.clone(), action, self.catalog.items());
        self.collection = collection;
        for event in events {
            self.record(GalleryEvent::Collection(event));
        }
        let visible = self.collection.view(self.catalog.items()).items.len();
        self.collection_cursor = self.collection_cursor.min(visible.saturating_sub(1));
    }

    fn handle_collection_key(&mut self, action: KeyAction) {
        let visible = self.collection.view(self.catalog.items()).items.len();
        let row_step = match self.collection.view_mode() {
            ViewMode::Grid => GRID_COLUMNS,
            ViewMode::List => 1,
        };
        let last = visible.saturating_sub(1);
        match action {
            KeyAction::Left => self.collection_cursor = self.collection_cursor.saturating_sub(1),
            KeyAction::Right => self.collection_cursor = (self.collection_cursor + 1).min(last),
            KeyAction::Up => {
                self.collection_cursor = self.collection_cursor.saturating_sub(row_step);
            }
            KeyAction::Down => {
                self.collection_cursor = (self.collection_cursor + row_step).min(last);
            }
            KeyAction::Activate | KeyAction::Toggle => {
                let id = self
                    .collection
                    .view(self.catalog.items())
                    .items
                    .get(self.collection_cursor)
                    .map(|item| item.id.clone());
                if let Some(id) = id {
                    self.collection_action(CollectionAction::ActivateItem(id));
                }
            }
            KeyAction::NextPage => self.collection_action(CollectionAction::NextPage),
            KeyAction::PrevPage => self.collection_action(CollectionAction::PrevPage),
            KeyAction::CycleFilter => {
                if let Some(key) = self.current_filter_key().map(str::to_string) {
                    self.collection_action(CollectionAction::CycleFilter { key });
                }
            }
            KeyAction::NextFilterKey => {
                let count = self.collection.filter_definitions().len();
                if count > 0 {
                    self.filter_key_index = (self.filter_key_index + 1) % count;
                }
            }
            KeyAction::ClearFilters => self.collection_action(CollectionAction::ClearFilters),
            KeyAction::CycleSort => self.collection_action(CollectionAction::CycleSortOption),
            KeyAction::ToggleViewMode => self.collection_action(CollectionAction::ToggleViewMode),
            KeyAction::CyclePageSize => {
                let current = self.collection.page_size();
                let next = PAGE_SIZES
                    .iter()
                    .position(|&size| size == current)
                    .map_or(PAGE_SIZES[0], |i| PAGE_SIZES[(i + 1) % PAGE_SIZES.len()]);
                self.collection_action(CollectionAction::SetPageSize(next));
            }
            KeyAction::Reset => {
                self.collection_action(CollectionAction::Reset);
                self.collection_cursor = 0;
            }
            _ => {}
        }
    }

    fn handle_accordion_key(&mut self, action: KeyAction) {
        let last = self.panels.len().saturating_sub(1);
        match action {
            KeyAction::Up => self.accordion_cursor = self.accordion_cursor.saturating_sub(1),
            KeyAction::Down => self.accordion_cursor = (self.accordion_cursor + 1).min(last),
            KeyAction::Toggle | KeyAction::Activate => {
                if let Some(id) = self.panels.get(self.accordion_cursor).map(|p| p.id.clone()) {
                    let expanded = self.accordion.toggle(&id);
                    self.record(GalleryEvent::Expansion { id, expanded });
                }
            }
            KeyAction::ToggleMode => {
                let mode = self.accordion.mode().toggled();
                self.accordion.set_mode(mode);
            }
            KeyAction::Reset => self.mount(StoryKind::Accordion),
            _ => {}
        }
    }

    fn handle_tree_key(&mut self, action: KeyAction) {
        let focused = visible_rows(&self.tree, &self.file_tree)
            .get(self.tree_cursor)
            .map(|row| (row.node.id.clone(), row.node.is_branch(), row.expanded));
        let row_count = visible_rows(&self.tree, &self.file_tree).len();

        match action {
            KeyAction::Up => self.tree_cursor = self.tree_cursor.saturating_sub(1),
            KeyAction::Down => {
                self.tree_cursor = (self.tree_cursor + 1).min(row_count.saturating_sub(1));
            }
            KeyAction::Toggle | KeyAction::Activate => {
                if let Some((id, true, _)) = focused {
                    let expanded = self.file_tree.toggle(&id);
                    self.record(GalleryEvent::Expansion { id, expanded });
                }
            }
            KeyAction::Right => {
                if let Some((id, true, false)) = focused {
                    self.file_tree.expand(&id);
                    self.record(GalleryEvent::Expansion { id, expanded: true });
                }
            }
            KeyAction::Left => {
                if let Some((id, true, true)) = focused {
                    self.file_tree.collapse(&id);
                    self.record(GalleryEvent::Expansion { id, expanded: false });
                }
            }
            KeyAction::ToggleMode => {
                let mode = self.file_tree.mode().toggled();
                self.file_tree.set_mode(mode);
            }
            KeyAction::Reset => self.mount(StoryKind::FileTree),
            _ => {}
        }

        let rows = visible_rows(&self.tree, &self.file_tree).len();
        self.tree_cursor = self.tree_cursor.min(rows.saturating_sub(1));
    }

    fn handle_tabs_key(&mut self, action: KeyAction) {
        let changed = match action {
            KeyAction::Left | KeyAction::Up => self.tabs.select_prev(),
            KeyAction::Right | KeyAction::Down => self.tabs.select_next(),
            _ => false,
        };
        if changed {
            if let Some(index) = self.tabs.active() {
                self.record(GalleryEvent::TabChanged { index });
            }
        }
    }

    fn handle_stepper_key(&mut self, action: KeyAction) {
        let last = self.stepper.step_count().saturating_sub(1);
        let event = match action {
            KeyAction::Right => self.stepper.advance(),
            KeyAction::Left => self.stepper.back(),
            KeyAction::Skip => self.stepper.skip(),
            KeyAction::Up => {
                self.step_cursor = self.step_cursor.saturating_sub(1);
                None
            }
            KeyAction::Down => {
                self.step_cursor = (self.step_cursor + 1).min(last);
                None
            }
            KeyAction::Activate => {
                if self.stepper.active() == Some(self.step_cursor) && self.stepper.is_last() {
                    self.stepper.finish()
                } else {
                    self.stepper.go_to(self.step_cursor)
                }
            }
            KeyAction::ToggleMode => {
                let linear = !self.stepper.is_linear();
                self.stepper.set_linear(linear);
                None
            }
            KeyAction::Reset => {
                self.stepper.reset();
                None
            }
            _ => None,
        };
        if let Some(event) = event {
            if let StepperEvent::StepChanged { index } = event {
                self.step_cursor = index;
            }
            self.record(GalleryEvent::Stepper(event));
        }
        if matches!(action, KeyAction::Reset) {
            self.step_cursor = 0;
        }
    }

    fn handle_lightbox_key(&mut self, action: KeyAction) {
        let last = self.images.len().saturating_sub(1);
        match action {
            KeyAction::Left | KeyAction::Up => {
                self.image_cursor = self.image_cursor.saturating_sub(1);
            }
            KeyAction::Right | KeyAction::Down => {
                self.image_cursor = (self.image_cursor + 1).min(last);
            }
            KeyAction::Activate | KeyAction::Toggle => {
                self.apply_overlay_action(OverlayAction::Open(self.image_cursor));
            }
            _ => {}
        }
    }

    fn handle_speed_dial_key(&mut self, action: KeyAction) {
        let event = match action {
            KeyAction::Toggle => self.speed_dial.toggle(),
            KeyAction::Cancel => self.speed_dial.close(),
            KeyAction::Down | KeyAction::Right => {
                self.speed_dial.highlight_next();
                None
            }
            KeyAction::Up | KeyAction::Left => {
                self.speed_dial.highlight_prev();
                None
            }
            KeyAction::Activate => {
                if self.speed_dial.is_open() {
                    self.speed_dial.choose()
                } else {
                    self.speed_dial.open()
                }
            }
            _ => None,
        };
        if let Some(event) = event {
            self.record(GalleryEvent::SpeedDial(event));
        }
    }

    fn handle_feed_key(&mut self, action: KeyAction) {
        let content = self.feed_items.len() + 1;
        let max_scroll = content.saturating_sub(self.feed_viewport.max(1));
        match action {
            KeyAction::Up => self.feed_scroll = self.feed_scroll.saturating_sub(1),
            KeyAction::Down => self.feed_scroll = (self.feed_scroll + 1).min(max_scroll),
            KeyAction::Reset => {
                self.unmount(StoryKind::Feed);
                self.mount(StoryKind::Feed);
                return;
            }
            _ => return,
        }
        self.check_sentinel();
    }

    fn handle_shell_key(&mut self, action: KeyAction) {
        let changed = match action {
            KeyAction::Toggle | KeyAction::Activate => {
                self.drawer.toggle();
                true
            }
            KeyAction::Cancel => self.drawer.close(),
            _ => false,
        };
        if changed {
            let open = self.drawer.is_open();
            self.record(GalleryEvent::DrawerToggled { open });
        }
    }
}

fn new_collection(settings: &GallerySettings) -> CollectionState {
    CollectionState::new(settings.page_size)
        .with_filters(fixtures::demo_filters())
        .with_sort_options(fixtures::demo_sort_options())
        .with_view_mode(settings.view_mode)
}

fn new_stepper() -> StepperState {
    StepperState::new(fixtures::STEPS.len(), true).with_optional(fixtures::OPTIONAL_STEPS)
}

/// Apply a key action to the gallery.
///
/// Gallery-level actions (story navigation, help, quit) are handled first;
/// everything else goes to the active story's state machine.
pub fn handle_key_action(mut state: GalleryState, action: KeyAction) -> GalleryState {
    state.dispatch(action);
    state
}

impl GalleryState {
    /// In-place form of [`handle_key_action`].
    pub fn dispatch(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
                return;
            }
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                return;
            }
            KeyAction::Cancel if self.help_visible => {
                self.help_visible = false;
                return;
            }
            KeyAction::NextStory => {
                let next = (self.story_index() + 1) % STORIES.len();
                self.select_story(next);
                return;
            }
            KeyAction::PrevStory => {
                let prev = (self.story_index() + STORIES.len() - 1) % STORIES.len();
                self.select_story(prev);
                return;
            }
            KeyAction::SelectStory(n) => {
                if n > 0 {
                    self.select_story(n - 1);
                }
                return;
            }
            _ => {}
        }

        match self.story().kind {
            StoryKind::Collection => self.handle_collection_key(action),
            StoryKind::Accordion => self.handle_accordion_key(action),
            StoryKind::FileTree => self.handle_tree_key(action),
            StoryKind::Tabs => self.handle_tabs_key(action),
            StoryKind::Stepper => self.handle_stepper_key(action),
            StoryKind::Lightbox => self.handle_lightbox_key(action),
            StoryKind::SpeedDial => self.handle_speed_dial_key(action),
            StoryKind::Feed => self.handle_feed_key(action),
            StoryKind::Masonry => {}
            StoryKind::Shell => self.handle_shell_key(action),
        }
    }
}

#[cfg(test)]
#[path = "gallery_tests.rs"]
mod tests;
