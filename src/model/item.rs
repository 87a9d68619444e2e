//! Catalog items and their attribute values.
//!
//! An item carries fixed display fields plus an open attribute map used for
//! filtering and sorting. Attribute lookup goes through [`Item::field`], which
//! also exposes the display fields under reserved keys.

use crate::model::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Reserved field key for the item title.
pub const TITLE_KEY: &str = "title";
/// Reserved field key for the item id.
pub const ID_KEY: &str = "id";
/// Reserved filter key that matches against tag membership.
pub const TAG_KEY: &str = "tag";

/// Attribute value attached to an item.
///
/// Deserialized untagged: booleans, numbers, RFC 3339 timestamps, then text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean flag (e.g. `featured`).
    Flag(bool),
    /// Numeric value (price, rating, size).
    Number(f64),
    /// Timestamp (published, modified).
    Date(DateTime<Utc>),
    /// Free text (category, author).
    Text(String),
}

impl AttrValue {
    /// Borrowed view of this value.
    pub fn as_field(&self) -> FieldValue<'_> {
        match self {
            AttrValue::Flag(b) => FieldValue::Flag(*b),
            AttrValue::Number(n) => FieldValue::Number(*n),
            AttrValue::Date(d) => FieldValue::Date(*d),
            AttrValue::Text(s) => FieldValue::Text(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<DateTime<Utc>> for AttrValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttrValue::Date(value)
    }
}

/// Borrowed field value resolved from an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Boolean flag.
    Flag(bool),
    /// Numeric value.
    Number(f64),
    /// Timestamp.
    Date(DateTime<Utc>),
    /// Text.
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Exact match against a selected filter value.
    ///
    /// Numbers and flags are parsed from `selected`; dates must be RFC 3339.
    /// There is no substring or case-folding match.
    pub fn matches(&self, selected: &str) -> bool {
        match self {
            FieldValue::Text(s) => *s == selected,
            FieldValue::Number(n) => selected
                .trim()
                .parse::<f64>()
                .map(|v| v == *n)
                .unwrap_or(false),
            FieldValue::Flag(b) => selected.parse::<bool>().map(|v| v == *b).unwrap_or(false),
            FieldValue::Date(d) => DateTime::parse_from_rfc3339(selected)
                .map(|v| v.with_timezone(&Utc) == *d)
                .unwrap_or(false),
        }
    }

    /// Canonical string form. Round-trips through [`FieldValue::matches`].
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Date(d) => d.to_rfc3339(),
        }
    }

    /// Total order used by sorting.
    ///
    /// Values of different kinds order by kind: flags, numbers, dates, text.
    /// Text compares case-insensitively.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Flag(a), FieldValue::Flag(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Flag(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Date(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }
}

/// A display item in a collection (card, product, photo, post).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id within the catalog.
    pub id: ItemId,
    /// Headline shown on the card.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub description: String,
    /// Media reference (image URL or asset name).
    #[serde(default)]
    pub media: Option<String>,
    /// Tag set.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Open attribute map for filtering and sorting.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Item {
    /// Create an item with only id and title.
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            media: None,
            tags: BTreeSet::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder: set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set media reference.
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Builder: add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Resolve a field by key.
    ///
    /// `title` and `id` resolve to the display fields; anything else is looked
    /// up in the attribute map.
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            TITLE_KEY => Some(FieldValue::Text(&self.title)),
            ID_KEY => Some(FieldValue::Text(self.id.as_str())),
            _ => self.attributes.get(key).map(AttrValue::as_field),
        }
    }

    /// Whether this item satisfies `key == selected`.
    ///
    /// The `tag` key matches when `selected` is one of the item's tags.
    /// Items lacking the field never match.
    pub fn matches(&self, key: &str, selected: &str) -> bool {
        if key == TAG_KEY {
            return self.tags.contains(selected);
        }
        self.field(key)
            .map(|field| field.matches(selected))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(id: &str) -> Item {
        Item::new(ItemId::new(id).expect("valid id"), format!("Item {id}"))
    }

    #[test]
    fn field_resolves_reserved_title_and_id() {
        let it = item("a");
        assert_eq!(it.field("title"), Some(FieldValue::Text("Item a")));
        assert_eq!(it.field("id"), Some(FieldValue::Text("a")));
    }

    #[test]
    fn matches_text_exactly_without_case_folding() {
        let it = item("a").with_attr("category", "Nature");
        assert!(it.matches("category", "Nature"));
        assert!(!it.matches("category", "nature"));
        assert!(!it.matches("category", "Nat"));
    }

    #[test]
    fn matches_numbers_by_value() {
        let it = item("a").with_attr("rating", 4_i64);
        assert!(it.matches("rating", "4"));
        assert!(it.matches("rating", "4.0"));
        assert!(!it.matches("rating", "5"));
        assert!(!it.matches("rating", "four"));
    }

    #[test]
    fn matches_tag_membership() {
        let it = item("a").with_tag("outdoor").with_tag("summer");
        assert!(it.matches("tag", "summer"));
        assert!(!it.matches("tag", "winter"));
    }

    #[test]
    fn missing_attribute_never_matches() {
        let it = item("a");
        assert!(!it.matches("category", "Nature"));
    }

    #[test]
    fn display_round_trips_through_matches() {
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let values = [
            AttrValue::from(3_i64),
            AttrValue::from(2.5),
            AttrValue::from(true),
            AttrValue::from(when),
            AttrValue::from("Tech"),
        ];
        for value in &values {
            let field = value.as_field();
            assert!(
                field.matches(&field.display()),
                "{value:?} must match its own display form"
            );
        }
    }

    #[test]
    fn compare_text_is_case_insensitive() {
        let a = FieldValue::Text("apple");
        let b = FieldValue::Text("Banana");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(
            FieldValue::Text("X").compare(&FieldValue::Text("x")),
            Ordering::Equal
        );
    }

    #[test]
    fn compare_orders_mixed_kinds_by_kind() {
        assert_eq!(
            FieldValue::Number(100.0).compare(&FieldValue::Text("a")),
            Ordering::Less
        );
    }

    #[test]
    fn deserializes_untagged_attributes() {
        let json = r#"{
            "id": "p1",
            "title": "Mountain",
            "tags": ["nature"],
            "attributes": {
                "featured": true,
                "price": 12.5,
                "published": "2024-01-02T03:04:05Z",
                "category": "Nature"
            }
        }"#;
        let it: Item = serde_json::from_str(json).expect("valid item json");
        assert_eq!(it.attributes.get("featured"), Some(&AttrValue::Flag(true)));
        assert_eq!(it.attributes.get("price"), Some(&AttrValue::Number(12.5)));
        assert!(matches!(
            it.attributes.get("published"),
            Some(AttrValue::Date(_))
        ));
        assert_eq!(
            it.attributes.get("category"),
            Some(&AttrValue::Text("Nature".to_string()))
        );
        assert!(it.description.is_empty());
    }
}
