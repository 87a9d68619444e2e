//! Expansion state for accordions and trees.
//!
//! Exclusive mode (accordion) keeps at most one node expanded; inclusive mode
//! (tree) allows any subset.

use crate::model::NodeId;
use tracing::{debug, trace};

/// Toggling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionMode {
    /// At most one node open. Expanding one collapses the rest.
    Exclusive,
    /// Any subset open. Toggling affects only the target.
    #[default]
    Inclusive,
}

impl ExpansionMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ExpansionMode::Exclusive => ExpansionMode::Inclusive,
            ExpansionMode::Inclusive => ExpansionMode::Exclusive,
        }
    }
}

/// Set of expanded node ids.
///
/// # Invariants
/// - No duplicates.
/// - `mode == Exclusive` implies `len() <= 1`.
///
/// Ids are kept in expansion order so switching to exclusive mode can keep
/// the most recently opened node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionState {
    mode: ExpansionMode,
    expanded: Vec<NodeId>,
}

impl ExpansionState {
    /// Nothing expanded.
    pub fn new(mode: ExpansionMode) -> Self {
        Self {
            mode,
            expanded: Vec::new(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> ExpansionMode {
        self.mode
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.contains(id)
    }

    /// Expanded ids, oldest first.
    pub fn expanded(&self) -> &[NodeId] {
        &self.expanded
    }

    /// Number of expanded nodes.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Flip `id`. Returns the node's new state.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        if self.is_expanded(id) {
            self.collapse(id);
            false
        } else {
            self.expand(id);
            true
        }
    }

    /// Expand `id`. In exclusive mode this collapses every other node.
    /// Returns `true` if anything changed.
    pub fn expand(&mut self, id: &NodeId) -> bool {
        if self.is_expanded(id) && (self.mode == ExpansionMode::Inclusive || self.len() == 1) {
            return false;
        }
        if self.mode == ExpansionMode::Exclusive {
            self.expanded.clear();
        }
        self.expanded.push(id.clone());
        debug!(node = %id, mode = ?self.mode, "Expanded node");
        true
    }

    /// Collapse `id`. Returns `true` if it was expanded.
    pub fn collapse(&mut self, id: &NodeId) -> bool {
        let before = self.expanded.len();
        self.expanded.retain(|n| n != id);
        let changed = self.expanded.len() != before;
        if changed {
            debug!(node = %id, "Collapsed node");
        }
        changed
    }

    /// Collapse everything.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Expand every id given. Inclusive mode only; a no-op in exclusive mode.
    pub fn expand_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a NodeId>) {
        if self.mode == ExpansionMode::Exclusive {
            trace!("expand_all ignored in exclusive mode");
            return;
        }
        for id in ids {
            if !self.is_expanded(id) {
                self.expanded.push(id.clone());
            }
        }
    }

    /// Switch mode. Entering exclusive mode keeps only the most recently
    /// expanded node.
    pub fn set_mode(&mut self, mode: ExpansionMode) {
        self.mode = mode;
        if mode == ExpansionMode::Exclusive && self.expanded.len() > 1 {
            let last = self.expanded.pop();
            self.expanded.clear();
            self.expanded.extend(last);
        }
    }

    /// Drop ids that no longer exist.
    pub fn retain_existing(&mut self, exists: impl Fn(&NodeId) -> bool) {
        self.expanded.retain(exists);
    }
}

/// Expansion transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionAction {
    /// Flip one node.
    Toggle(NodeId),
    /// Expand one node.
    Expand(NodeId),
    /// Collapse one node.
    Collapse(NodeId),
    /// Collapse everything.
    CollapseAll,
    /// Expand all listed nodes (inclusive only).
    ExpandAll(Vec<NodeId>),
    /// Switch mode.
    SetMode(ExpansionMode),
}

/// Apply an expansion action.
pub fn handle_expansion_action(
    mut state: ExpansionState,
    action: ExpansionAction,
) -> ExpansionState {
    match action {
        ExpansionAction::Toggle(id) => {
            state.toggle(&id);
        }
        ExpansionAction::Expand(id) => {
            state.expand(&id);
        }
        ExpansionAction::Collapse(id) => {
            state.collapse(&id);
        }
        ExpansionAction::CollapseAll => state.collapse_all(),
        ExpansionAction::ExpandAll(ids) => state.expand_all(&ids),
        ExpansionAction::SetMode(mode) => state.set_mode(mode),
    }
    state
}

#[cfg(test)]
#[path = "expansion_tests.rs"]
mod tests;
