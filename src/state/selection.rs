//! Single-index selection for tab bars.

use tracing::{trace, warn};

/// Active index into a list of `count` tabs.
///
/// # Invariant
/// When `count > 0`, the active index is in `[0, count - 1]`. When
/// `count == 0` there is no active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    active: usize,
    count: usize,
}

impl SelectionState {
    /// Select the first of `count` tabs.
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    /// Start on `initial`, falling back to 0 when out of range.
    pub fn with_initial(count: usize, initial: usize) -> Self {
        let active = if initial < count { initial } else { 0 };
        Self { active, count }
    }

    /// Active index, `None` when there are no tabs.
    pub fn active(&self) -> Option<usize> {
        (self.count > 0).then_some(self.active)
    }

    /// Number of tabs.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Select `index`. Out-of-range requests are ignored.
    /// Returns `true` if the active index changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            trace!(index, count = self.count, "Ignoring out-of-range selection");
            return false;
        }
        let changed = self.active != index;
        self.active = index;
        changed
    }

    /// Move to the next tab, wrapping to the first.
    pub fn select_next(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.select((self.active + 1) % self.count)
    }

    /// Move to the previous tab, wrapping to the last.
    pub fn select_prev(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.select((self.active + self.count - 1) % self.count)
    }

    /// Update the tab count, clamping the active index when the list shrank.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.active = 0;
        } else if self.active >= count {
            warn!(
                active = self.active,
                count,
                "Selected tab past end, clamping"
            );
            self.active = count - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_in_range_changes_active() {
        let mut tabs = SelectionState::new(3);
        assert!(tabs.select(2));
        assert_eq!(tabs.active(), Some(2));
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let mut tabs = SelectionState::with_initial(3, 1);
        assert!(!tabs.select(3));
        assert!(!tabs.select(usize::MAX));
        assert_eq!(tabs.active(), Some(1));
    }

    #[test]
    fn select_same_index_reports_no_change() {
        let mut tabs = SelectionState::new(3);
        assert!(!tabs.select(0));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut tabs = SelectionState::with_initial(3, 2);
        tabs.select_next();
        assert_eq!(tabs.active(), Some(0));
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut tabs = SelectionState::new(3);
        tabs.select_prev();
        assert_eq!(tabs.active(), Some(2));
    }

    #[test]
    fn empty_selection_has_no_active_index() {
        let mut tabs = SelectionState::new(0);
        assert_eq!(tabs.active(), None);
        assert!(!tabs.select_next());
        assert!(!tabs.select_prev());
        assert!(!tabs.select(0));
    }

    #[test]
    fn with_initial_out_of_range_falls_back_to_zero() {
        assert_eq!(SelectionState::with_initial(2, 5).active(), Some(0));
    }

    #[test]
    fn shrinking_count_clamps_active() {
        let mut tabs = SelectionState::with_initial(5, 4);
        tabs.set_count(2);
        assert_eq!(tabs.active(), Some(1));
        tabs.set_count(0);
        assert_eq!(tabs.active(), None);
        tabs.set_count(3);
        assert_eq!(tabs.active(), Some(0));
    }
}
