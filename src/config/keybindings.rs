//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::state::OverlayAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup; event kind and
    /// keyboard state reported by the terminal are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no key is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Gallery navigation
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextStory);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevStory);
        for n in 1..=9u8 {
            bind(
                KeyCode::Char(char::from(b'0' + n)),
                KeyModifiers::NONE,
                KeyAction::SelectStory(usize::from(n)),
            );
        }

        // Vim-style movement
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::Up);
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::Down);
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::Left);
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::Right);

        // Arrow key movement
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::Up);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::Down);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::Left);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::Right);

        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Activate);
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::Toggle);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Cancel);

        // Collection
        bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('N'), KeyModifiers::SHIFT, KeyAction::PrevPage);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(
            KeyCode::Char('f'),
            KeyModifiers::NONE,
            KeyAction::CycleFilter,
        );
        bind(
            KeyCode::Char('F'),
            KeyModifiers::SHIFT,
            KeyAction::NextFilterKey,
        );
        bind(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyAction::ClearFilters,
        );
        bind(KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::CycleSort);
        bind(
            KeyCode::Char('v'),
            KeyModifiers::NONE,
            KeyAction::ToggleViewMode,
        );
        bind(
            KeyCode::Char('p'),
            KeyModifiers::NONE,
            KeyAction::CyclePageSize,
        );

        // Pattern-specific
        bind(
            KeyCode::Char('m'),
            KeyModifiers::NONE,
            KeyAction::ToggleMode,
        );
        bind(KeyCode::Char('S'), KeyModifiers::SHIFT, KeyAction::Skip);
        bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Reset);
        // Some terminals report shifted punctuation with SHIFT set
        for modifiers in [KeyModifiers::NONE, KeyModifiers::SHIFT] {
            bind(KeyCode::Char('+'), modifiers, KeyAction::ZoomIn);
            bind(KeyCode::Char('?'), modifiers, KeyAction::Help);
        }
        bind(KeyCode::Char('='), KeyModifiers::NONE, KeyAction::ZoomIn);
        bind(KeyCode::Char('-'), KeyModifiers::NONE, KeyAction::ZoomOut);

        // Application controls
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}

/// Keys an open lightbox captures before the regular bindings see them.
///
/// Returns `None` for keys the overlay does not handle; those fall through
/// to [`KeyBindings`].
pub fn overlay_action_for_key(key: KeyEvent) -> Option<OverlayAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(OverlayAction::Previous),
        KeyCode::Right | KeyCode::Char('l') => Some(OverlayAction::Next),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(OverlayAction::ZoomIn),
        KeyCode::Char('-') => Some(OverlayAction::ZoomOut),
        KeyCode::Char('0') => Some(OverlayAction::ResetZoom),
        KeyCode::Esc | KeyCode::Char('q') => Some(OverlayAction::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_map_digits_to_stories() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('1'))),
            Some(KeyAction::SelectStory(1))
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('9'))),
            Some(KeyAction::SelectStory(9))
        );
        assert_eq!(bindings.get(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn default_bindings_map_uppercase_s_to_skip() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);

        assert_eq!(
            bindings.get(key_event),
            Some(KeyAction::Skip),
            "Uppercase 'S' (shift+s) should map to Skip"
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('s'))),
            Some(KeyAction::CycleSort)
        );
    }

    #[test]
    fn default_bindings_map_ctrl_c_to_quit() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.get(key_event), Some(KeyAction::Quit));
    }

    #[test]
    fn default_bindings_accept_shifted_question_mark() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(bindings.get(key_event), Some(KeyAction::Help));
    }

    #[test]
    fn lookup_ignores_event_kind_and_state() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('j'),
            KeyModifiers::NONE,
            KeyEventKind::Press,
            KeyEventState::NUM_LOCK,
        );
        assert_eq!(bindings.get(key_event), Some(KeyAction::Down));
    }

    #[test]
    fn arrows_and_vim_keys_agree() {
        let bindings = KeyBindings::default();
        for (arrow, vim) in [
            (KeyCode::Up, 'k'),
            (KeyCode::Down, 'j'),
            (KeyCode::Left, 'h'),
            (KeyCode::Right, 'l'),
        ] {
            assert_eq!(
                bindings.get(key(arrow)),
                bindings.get(key(KeyCode::Char(vim)))
            );
        }
    }

    #[test]
    fn overlay_keys_navigate_zoom_and_close() {
        assert_eq!(
            overlay_action_for_key(key(KeyCode::Left)),
            Some(OverlayAction::Previous)
        );
        assert_eq!(
            overlay_action_for_key(key(KeyCode::Right)),
            Some(OverlayAction::Next)
        );
        assert_eq!(
            overlay_action_for_key(key(KeyCode::Char('+'))),
            Some(OverlayAction::ZoomIn)
        );
        assert_eq!(
            overlay_action_for_key(key(KeyCode::Char('-'))),
            Some(OverlayAction::ZoomOut)
        );
        assert_eq!(
            overlay_action_for_key(key(KeyCode::Esc)),
            Some(OverlayAction::Close)
        );
    }

    #[test]
    fn overlay_lets_unhandled_keys_fall_through() {
        assert_eq!(overlay_action_for_key(key(KeyCode::Tab)), None);
        assert_eq!(overlay_action_for_key(key(KeyCode::Char('?'))), None);
        assert_eq!(
            overlay_action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }
}
