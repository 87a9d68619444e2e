//! Open/closed state for drawers, modals, and FAB speed dials.

use crate::model::SpeedDialEvent;
use tracing::trace;

/// Plain open/closed flag (drawer, modal, menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    /// Closed disclosure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open. Returns `true` if it was closed.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Close. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// Floating action button with a fan of secondary actions.
///
/// # Cardinality
/// - Closed: 1 state (no highlight)
/// - Open: `action_count` states (one highlighted action each)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedDialState {
    disclosure: Disclosure,
    action_count: usize,
    highlighted: usize,
}

impl SpeedDialState {
    /// Closed dial with `action_count` actions.
    pub fn new(action_count: usize) -> Self {
        Self {
            disclosure: Disclosure::new(),
            action_count,
            highlighted: 0,
        }
    }

    /// Whether the dial is open.
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Number of actions.
    pub fn action_count(&self) -> usize {
        self.action_count
    }

    /// Highlighted action while open.
    pub fn highlighted(&self) -> Option<usize> {
        (self.is_open() && self.action_count > 0).then_some(self.highlighted)
    }

    /// Open with the first action highlighted. A dial without actions
    /// does not open.
    pub fn open(&mut self) -> Option<SpeedDialEvent> {
        if self.action_count == 0 || !self.disclosure.open() {
            return None;
        }
        self.highlighted = 0;
        Some(SpeedDialEvent::Opened)
    }

    /// Close without choosing.
    pub fn close(&mut self) -> Option<SpeedDialEvent> {
        self.disclosure.close().then_some(SpeedDialEvent::Closed)
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self) -> Option<SpeedDialEvent> {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    /// Move highlight to the next action, clamping at the last.
    pub fn highlight_next(&mut self) {
        if self.is_open() && self.action_count > 0 {
            self.highlighted = (self.highlighted + 1).min(self.action_count - 1);
        }
    }

    /// Move highlight to the previous action, clamping at the first.
    pub fn highlight_prev(&mut self) {
        if self.is_open() {
            self.highlighted = self.highlighted.saturating_sub(1);
        }
    }

    /// Choose the highlighted action and close the dial.
    pub fn choose(&mut self) -> Option<SpeedDialEvent> {
        let index = self.highlighted()?;
        self.disclosure.close();
        Some(SpeedDialEvent::ActionChosen { index })
    }

    /// Choose a specific action. Out-of-range or closed dials ignore it.
    pub fn choose_index(&mut self, index: usize) -> Option<SpeedDialEvent> {
        if !self.is_open() || index >= self.action_count {
            trace!(index, "Ignoring speed dial choice");
            return None;
        }
        self.disclosure.close();
        Some(SpeedDialEvent::ActionChosen { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_open_close_report_changes() {
        let mut d = Disclosure::new();
        assert!(d.open());
        assert!(!d.open());
        assert!(d.close());
        assert!(!d.close());
    }

    #[test]
    fn disclosure_toggle_flips() {
        let mut d = Disclosure::new();
        assert!(d.toggle());
        assert!(!d.toggle());
    }

    #[test]
    fn speed_dial_opens_with_first_action_highlighted() {
        let mut dial = SpeedDialState::new(3);
        assert_eq!(dial.open(), Some(SpeedDialEvent::Opened));
        assert_eq!(dial.highlighted(), Some(0));
    }

    #[test]
    fn speed_dial_without_actions_stays_closed() {
        let mut dial = SpeedDialState::new(0);
        assert_eq!(dial.open(), None);
        assert!(!dial.is_open());
    }

    #[test]
    fn highlight_clamps_at_ends() {
        let mut dial = SpeedDialState::new(2);
        dial.open();
        dial.highlight_prev();
        assert_eq!(dial.highlighted(), Some(0));
        dial.highlight_next();
        dial.highlight_next();
        assert_eq!(dial.highlighted(), Some(1));
    }

    #[test]
    fn choose_emits_action_and_closes() {
        let mut dial = SpeedDialState::new(3);
        dial.open();
        dial.highlight_next();
        assert_eq!(
            dial.choose(),
            Some(SpeedDialEvent::ActionChosen { index: 1 })
        );
        assert!(!dial.is_open());
        assert_eq!(dial.highlighted(), None);
    }

    #[test]
    fn choose_while_closed_is_ignored() {
        let mut dial = SpeedDialState::new(3);
        assert_eq!(dial.choose(), None);
        assert_eq!(dial.choose_index(0), None);
    }

    #[test]
    fn choose_index_out_of_range_is_ignored() {
        let mut dial = SpeedDialState::new(3);
        dial.open();
        assert_eq!(dial.choose_index(3), None);
        assert!(dial.is_open());
    }

    #[test]
    fn reopening_resets_highlight() {
        let mut dial = SpeedDialState::new(3);
        dial.open();
        dial.highlight_next();
        dial.close();
        dial.open();
        assert_eq!(dial.highlighted(), Some(0));
    }
}
