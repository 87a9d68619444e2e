//! Filter criteria for collection views.
//!
//! A [`FilterSet`] maps filter keys to a [`FilterSelection`]. Criteria combine
//! with logical AND; a key set to [`FilterSelection::Any`] imposes nothing.

use crate::model::Item;
use std::collections::BTreeMap;

/// Sentinel value select controls use for "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// Selected value for one filter key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    /// No constraint.
    #[default]
    Any,
    /// Attribute must equal this value.
    Is(String),
}

impl FilterSelection {
    /// Normalize a raw control value: empty or `"all"` means no constraint.
    ///
    /// An attribute whose real value is `"all"` cannot be selected through
    /// this constructor. Build [`FilterSelection::Is`] directly for values
    /// taken from the data, as filter cycling does.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() || raw == ALL_SENTINEL {
            FilterSelection::Any
        } else {
            FilterSelection::Is(raw)
        }
    }

    /// The constrained value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            FilterSelection::Any => None,
            FilterSelection::Is(v) => Some(v),
        }
    }

    /// Whether this selection imposes no constraint.
    pub fn is_any(&self) -> bool {
        matches!(self, FilterSelection::Any)
    }
}

/// A single filter key with its current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriterion {
    /// Item attribute this criterion constrains.
    pub key: String,
    /// Current selection.
    pub selection: FilterSelection,
}

/// Declared filter control (`filters[]` in the component surface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDefinition {
    /// Attribute key.
    pub key: String,
    /// Label shown next to the control.
    pub label: String,
}

impl FilterDefinition {
    /// Create a filter definition.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Active filter selections keyed by attribute.
///
/// Keys with [`FilterSelection::Any`] are not stored, so two sets with the
/// same constraints compare equal regardless of history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    active: BTreeMap<String, String>,
}

impl FilterSet {
    /// Empty set: every item passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear one key. Returns `true` if the set changed.
    pub fn set(&mut self, key: impl Into<String>, selection: FilterSelection) -> bool {
        let key = key.into();
        match selection {
            FilterSelection::Any => self.active.remove(&key).is_some(),
            FilterSelection::Is(value) => {
                if self.active.get(&key) == Some(&value) {
                    false
                } else {
                    self.active.insert(key, value);
                    true
                }
            }
        }
    }

    /// Builder form of [`FilterSet::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, FilterSelection::from_raw(value));
        self
    }

    /// Current selection for `key`.
    pub fn selection(&self, key: &str) -> FilterSelection {
        self.active
            .get(key)
            .map(|v| FilterSelection::Is(v.clone()))
            .unwrap_or_default()
    }

    /// Remove every constraint. Returns `true` if anything was active.
    pub fn clear(&mut self) -> bool {
        let changed = !self.active.is_empty();
        self.active.clear();
        changed
    }

    /// Whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active constraints as criteria, ordered by key.
    pub fn criteria(&self) -> Vec<FilterCriterion> {
        self.active
            .iter()
            .map(|(key, value)| FilterCriterion {
                key: key.clone(),
                selection: FilterSelection::Is(value.clone()),
            })
            .collect()
    }

    /// AND of every active constraint.
    pub fn accepts(&self, item: &Item) -> bool {
        self.active
            .iter()
            .all(|(key, value)| item.matches(key, value))
    }

    /// Like [`FilterSet::accepts`] but ignoring one key.
    ///
    /// Used for option counts: how many items would match if `skip` were
    /// set to a particular value.
    pub fn accepts_except(&self, item: &Item, skip: &str) -> bool {
        self.active
            .iter()
            .filter(|(key, _)| key.as_str() != skip)
            .all(|(key, value)| item.matches(key, value))
    }
}
