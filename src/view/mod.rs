//! TUI rendering and terminal management (impure shell)

mod collection;
pub mod constants;
mod expansion;
mod feed;
mod help;
mod helpers;
mod layout;
mod overlays;
mod responsive;
mod styles;
mod tabs;

pub use help::render_help_overlay;
pub use helpers::{empty_line, key_value_line};
pub use layout::{calculate_story_area, describe_event, render_layout};
pub use responsive::breakpoint_for_width;
pub use styles::{palette_color, ColorConfig, GalleryStyles};

use crate::config::{overlay_action_for_key, KeyBindings};
use crate::model::{AppError, KeyAction, Theme};
use crate::source::FeedSource;
use crate::state::GalleryState;
use crate::stories::StoryKind;
use crate::view_state::PipelineCache;
use constants::{FEED_DELAY, TICK_INTERVAL};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Gallery application.
///
/// Generic over backend to support testing with TestBackend
pub struct GalleryApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: GalleryState,
    key_bindings: KeyBindings,
    theme: Theme,
    styles: GalleryStyles,
    cache: PipelineCache,
    feed: FeedSource,
}

impl GalleryApp<CrosstermBackend<Stdout>> {
    /// Set the terminal up (raw mode, alternate screen) and build the app.
    pub fn new(state: GalleryState, theme: Theme, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            styles: GalleryStyles::from_theme(&theme, colors),
            state,
            key_bindings: KeyBindings::default(),
            theme,
            cache: PipelineCache::new(),
            feed: FeedSource::worker(FEED_DELAY),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Redraws after input, after a feed
    /// response arrives, and on resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let mut dirty = false;
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.poll_feed();
            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> GalleryApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // An open lightbox owns navigation, zoom and close keys
        if self.state.captures_overlay_keys() && !self.state.help_visible {
            if let Some(action) = overlay_action_for_key(key) {
                debug!(?action, "Overlay key");
                self.state.apply_overlay_action(action);
                return false;
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if self.state.help_visible
            && !matches!(
                action,
                KeyAction::Help | KeyAction::Cancel | KeyAction::Quit
            )
        {
            return false;
        }

        self.state.dispatch(action);
        self.submit_load_request();
        self.state.should_quit
    }

    /// Apply every ready feed response. Returns true if any arrived.
    fn poll_feed(&mut self) -> bool {
        let responses = self.feed.poll();
        if responses.is_empty() {
            return false;
        }
        for response in responses {
            match response.result {
                Ok(batch) => {
                    let outcome = self.state.apply_feed_batch(response.token, batch);
                    debug!(?outcome, "Feed response applied");
                }
                Err(err) => {
                    warn!(error = %err, "Feed load failed");
                    self.state.fail_feed_load(response.token);
                }
            }
        }
        self.submit_load_request();
        true
    }

    fn submit_load_request(&mut self) {
        if let Some(request) = self.state.take_load_request() {
            self.feed.submit(request);
        }
    }

    /// Render the current frame
    ///
    /// Reports the feed viewport before drawing so the sentinel check sees
    /// the current terminal size.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);

        if self.state.story().kind == StoryKind::Feed {
            let story_area = calculate_story_area(frame_area);
            self.state
                .set_feed_viewport(feed::feed_viewport_height(story_area));
            self.submit_load_request();
        }

        let Self {
            terminal,
            state,
            theme,
            styles,
            cache,
            ..
        } = self;
        terminal.draw(|frame| render_layout(frame, state, cache, theme, styles))?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> GalleryApp<B>
where
    B: ratatui::backend::Backend,
{
    /// App over an existing terminal with a synchronous feed source.
    pub(crate) fn new_for_test(terminal: Terminal<B>, state: GalleryState) -> Self {
        let theme = Theme::default();
        Self {
            terminal,
            styles: GalleryStyles::from_theme(&theme, ColorConfig::new(false)),
            state,
            key_bindings: KeyBindings::default(),
            theme,
            cache: PipelineCache::new(),
            feed: FeedSource::inline(),
        }
    }
}

/// Run the gallery until the user quits.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(state: GalleryState, theme: Theme, colors: ColorConfig) -> Result<(), TuiError> {
    info!(story = state.story().id, "Starting gallery");
    let mut app = GalleryApp::new(state, theme, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GallerySettings;
    use crate::stories::{find_story, fixtures};
    use helpers::buffer_to_string;
    use ratatui::backend::TestBackend;

    fn create_test_app() -> GalleryApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        let catalog = fixtures::demo_catalog().expect("fixture builds");
        let state = GalleryState::new(catalog, GallerySettings::default()).expect("gallery builds");
        GalleryApp::new_for_test(terminal, state)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn open_story(app: &mut GalleryApp<TestBackend>, id: &str) {
        let (index, _) = find_story(id).expect("story exists");
        app.state.select_story(index);
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c));
    }

    #[test]
    fn handle_key_unbound_returns_false() {
        let mut app = create_test_app();
        assert!(!app.handle_key(key(KeyCode::F(12))));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = create_test_app();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert!(!app.handle_key(release));
    }

    #[test]
    fn tab_moves_to_next_story() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state.story().id, "accordion");
    }

    #[test]
    fn q_closes_open_lightbox_instead_of_quitting() {
        let mut app = create_test_app();
        open_story(&mut app, "lightbox");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.state.lightbox.is_open());

        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert!(!app.state.lightbox.is_open());
    }

    #[test]
    fn lightbox_keys_wrap_and_zoom() {
        let mut app = create_test_app();
        open_story(&mut app, "lightbox");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(
            app.state.lightbox.index(),
            Some(app.state.images().len() - 1)
        );

        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(app.state.lightbox.zoom(), Some(1.5));
        app.handle_key(key(KeyCode::Char('0')));
        assert_eq!(app.state.lightbox.zoom(), Some(1.0));
    }

    #[test]
    fn help_swallows_story_keys() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.state.help_visible);

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.state.collection.page(), 1);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.state.help_visible);
    }

    #[test]
    fn feed_loads_first_batch_after_draw_and_poll() {
        let mut app = create_test_app();
        open_story(&mut app, "feed");
        app.draw().expect("draw");
        assert!(app.poll_feed());
        assert_eq!(app.state.feed_items().len(), 6);
    }

    #[test]
    fn leaving_feed_discards_in_flight_batch() {
        let mut app = create_test_app();
        open_story(&mut app, "feed");
        app.draw().expect("draw");
        app.handle_key(key(KeyCode::Tab));
        app.poll_feed();
        assert!(app.state.feed_items().is_empty());
    }

    #[test]
    fn draw_renders_without_error() {
        let mut app = create_test_app();
        app.draw().expect("draw");
        let rendered = buffer_to_string(app.terminal.backend().buffer());
        assert!(rendered.contains("Card Catalog"));
    }
}
