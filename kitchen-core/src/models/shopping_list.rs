//! Shopping list built from recipe ingredients.
//!
//! Items are unique by name (exact, case-sensitive). Ingestion appends new
//! names and leaves existing entries alone, so the first quantity written
//! for a name wins until the user edits it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchasable item. Quantity is free text ("2", "a few", "").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

impl ShoppingItem {
    /// Create an item with an empty quantity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: String::new(),
        }
    }

    pub fn with_quantity(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = self.quantity.trim();
        if quantity.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", quantity, self.name)
        }
    }
}

/// Addresses one entry, either by zero-based position or by exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Position(usize),
    Name(String),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Position(i) => write!(f, "position {}", i + 1),
            ItemRef::Name(name) => write!(f, "'{}'", name),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShoppingError {
    #[error("no shopping list item at position {position} (list has {len} items)")]
    OutOfRange { position: usize, len: usize },
    #[error("no shopping list item named '{0}'")]
    UnknownName(String),
}

/// Ordered shopping list. Persists as a plain JSON array of items.
///
/// Restoring a persisted array applies the same uniqueness rule as ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ShoppingItem>", into = "Vec<ShoppingItem>")]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Append every candidate whose name is not already on the list.
    ///
    /// Returns how many were appended.
    pub fn ingest<I>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = ShoppingItem>,
    {
        let before = self.items.len();
        for candidate in candidates {
            if !self.contains(&candidate.name) {
                self.items.push(candidate);
            }
        }
        self.items.len() - before
    }

    /// Resolve a reference to a zero-based position.
    pub fn position(&self, item: &ItemRef) -> Result<usize, ShoppingError> {
        match item {
            ItemRef::Position(position) if *position < self.items.len() => Ok(*position),
            ItemRef::Position(position) => Err(ShoppingError::OutOfRange {
                position: *position,
                len: self.items.len(),
            }),
            ItemRef::Name(name) => self
                .items
                .iter()
                .position(|i| &i.name == name)
                .ok_or_else(|| ShoppingError::UnknownName(name.clone())),
        }
    }

    /// Overwrite the quantity of one entry.
    pub fn set_quantity(
        &mut self,
        item: &ItemRef,
        quantity: impl Into<String>,
    ) -> Result<(), ShoppingError> {
        let position = self.position(item)?;
        self.items[position].quantity = quantity.into();
        Ok(())
    }

    /// Remove one entry; later entries shift down by one.
    pub fn remove(&mut self, item: &ItemRef) -> Result<ShoppingItem, ShoppingError> {
        let position = self.position(item)?;
        Ok(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Plain text for printing: one "<quantity> <name>" line per item.
    pub fn printable(&self) -> String {
        self.items
            .iter()
            .map(ShoppingItem::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingItem;
    type IntoIter = std::slice::Iter<'a, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<ShoppingItem> for ShoppingList {
    /// Collects with the same name-uniqueness rule as [`ShoppingList::ingest`].
    fn from_iter<I: IntoIterator<Item = ShoppingItem>>(iter: I) -> Self {
        let mut list = ShoppingList::new();
        list.ingest(iter);
        list
    }
}

impl From<Vec<ShoppingItem>> for ShoppingList {
    fn from(items: Vec<ShoppingItem>) -> Self {
        items.into_iter().collect()
    }
}

impl From<ShoppingList> for Vec<ShoppingItem> {
    fn from(list: ShoppingList) -> Self {
        list.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salt_list() -> ShoppingList {
        [ShoppingItem::with_quantity("Salt", "1 tsp")].into_iter().collect()
    }

    #[test]
    fn test_ingest_preserves_existing_quantity() {
        let mut list = salt_list();
        let added = list.ingest(vec![ShoppingItem::new("Salt"), ShoppingItem::new("Pepper")]);

        assert_eq!(added, 1);
        assert_eq!(
            list.items(),
            &[
                ShoppingItem::with_quantity("Salt", "1 tsp"),
                ShoppingItem::new("Pepper"),
            ]
        );
    }

    #[test]
    fn test_ingest_twice_adds_nothing() {
        let candidates = vec![ShoppingItem::new("Eggs"), ShoppingItem::new("Milk")];
        let mut list = ShoppingList::new();
        assert_eq!(list.ingest(candidates.clone()), 2);
        let snapshot = list.clone();

        assert_eq!(list.ingest(candidates), 0);
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_ingest_dedupes_within_batch() {
        let mut list = ShoppingList::new();
        list.ingest(vec![
            ShoppingItem::with_quantity("Eggs", "6"),
            ShoppingItem::with_quantity("Eggs", "12"),
        ]);
        assert_eq!(list.items(), &[ShoppingItem::with_quantity("Eggs", "6")]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut list = ShoppingList::new();
        list.ingest(vec![ShoppingItem::new("salt"), ShoppingItem::new("Salt")]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_set_quantity_by_position_and_name() {
        let mut list: ShoppingList =
            vec![ShoppingItem::new("Eggs"), ShoppingItem::new("Milk")].into_iter().collect();

        list.set_quantity(&ItemRef::Position(1), "2 litres").unwrap();
        list.set_quantity(&ItemRef::Name("Eggs".into()), "a dozen").unwrap();

        assert_eq!(list.items()[0].quantity, "a dozen");
        assert_eq!(list.items()[1].quantity, "2 litres");
    }

    #[test]
    fn test_set_quantity_out_of_range() {
        let mut list = salt_list();
        let err = list.set_quantity(&ItemRef::Position(3), "2").unwrap_err();
        assert_eq!(err, ShoppingError::OutOfRange { position: 3, len: 1 });
        assert_eq!(list, salt_list());
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut list: ShoppingList = ["A", "B", "C"].into_iter().map(ShoppingItem::new).collect();

        let removed = list.remove(&ItemRef::Position(0)).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(list.items()[0].name, "B");
        assert_eq!(list.position(&ItemRef::Name("C".into())), Ok(1));
    }

    #[test]
    fn test_remove_unknown_name() {
        let mut list = salt_list();
        assert_eq!(
            list.remove(&ItemRef::Name("salt".into())),
            Err(ShoppingError::UnknownName("salt".into()))
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = salt_list();
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_printable() {
        let list: ShoppingList = vec![
            ShoppingItem::with_quantity("Salt", "1 tsp"),
            ShoppingItem::new("Pepper"),
        ]
        .into_iter()
        .collect();
        assert_eq!(list.printable(), "1 tsp Salt\nPepper");
    }

    #[test]
    fn test_restore_drops_duplicate_names() {
        let json = r#"[{"name":"Salt","quantity":"1 tsp"},{"name":"Salt","quantity":"2 tsp"}]"#;
        let parsed: ShoppingList = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, salt_list());
    }

    #[test]
    fn test_missing_quantity_defaults_to_empty() {
        let parsed: ShoppingList = serde_json::from_str(r#"[{"name":"Salt"}]"#).unwrap();
        assert_eq!(parsed.items()[0].quantity, "");
    }

    #[test]
    fn test_shopping_list_json_roundtrip() {
        let list = salt_list();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"name":"Salt","quantity":"1 tsp"}]"#);

        let parsed: ShoppingList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }
}
