//! Uniqueness-checked item collection.

use crate::model::{CatalogError, Item, ItemId};
use std::collections::HashSet;

/// An ordered list of items with unique ids.
///
/// Construction rejects duplicates, so lookups by id are unambiguous.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting the first duplicate id.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Whether an item with `id` exists.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Append more items (infinite feeds), rejecting ids already present.
    pub fn extend(&mut self, more: Vec<Item>) -> Result<(), CatalogError> {
        let mut seen: HashSet<ItemId> = self.items.iter().map(|i| i.id.clone()).collect();
        for item in &more {
            if !seen.insert(item.id.clone()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        self.items.extend(more);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item::new(ItemId::new(id).expect("valid id"), id)
    }

    #[test]
    fn new_accepts_unique_ids() {
        let catalog = Catalog::new(vec![item("a"), item("b")]).expect("unique ids");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&ItemId::new("b").expect("valid id")));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![item("a"), item("b"), item("a")]);
        match result {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id.as_str(), "a"),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn extend_rejects_ids_already_present() {
        let mut catalog = Catalog::new(vec![item("a")]).expect("unique ids");
        assert!(catalog.extend(vec![item("a")]).is_err());
        assert_eq!(catalog.len(), 1, "Failed extend must not partially apply");
        catalog.extend(vec![item("b"), item("c")]).expect("new ids");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let catalog = Catalog::new(vec![item("a")]).expect("unique ids");
        let missing = ItemId::new("zzz").expect("valid id");
        assert!(catalog.get(&missing).is_none());
    }
}
