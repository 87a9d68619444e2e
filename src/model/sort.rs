//! Sort descriptors and labelled sort options.

use crate::model::Item;
use serde::Deserialize;
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// The other direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort: field key plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortDescriptor {
    /// Field key resolved through [`Item::field`].
    pub key: String,
    /// Direction.
    pub direction: SortDirection,
}

impl SortDescriptor {
    /// Ascending sort on `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Compare two items under this descriptor.
    ///
    /// Items missing the field sort after items that have it, in either
    /// direction. Equal items return `Equal` so a stable sort keeps their
    /// original order.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match (a.field(&self.key), b.field(&self.key)) {
            (Some(x), Some(y)) => {
                let ord = x.compare(&y);
                match self.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Labelled sort choice (`sortOptions[]` in the component surface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    /// Stable option value (e.g. `"price-asc"`).
    pub value: String,
    /// Label shown in the select control.
    pub label: String,
    /// Descriptor applied when chosen.
    pub descriptor: SortDescriptor,
}

impl SortOption {
    /// Create a sort option.
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        descriptor: SortDescriptor,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            descriptor,
        }
    }
}
