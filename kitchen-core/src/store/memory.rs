//! In-memory slot storage.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;

use super::{Slot, Store, StoreError};
use crate::models::{FavoriteSet, ShoppingList};

/// Keeps each slot as a JSON string, so values still pass through the same
/// serialization as on disk. Counts writes per slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<Slot, String>>,
    writes: RefCell<HashMap<Slot, usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON currently held in a slot.
    pub fn raw(&self, slot: Slot) -> Option<String> {
        self.slots.borrow().get(&slot).cloned()
    }

    /// Replace a slot's raw contents.
    pub fn put_raw(&self, slot: Slot, json: impl Into<String>) {
        self.slots.borrow_mut().insert(slot, json.into());
    }

    /// Number of snapshots written to a slot.
    pub fn writes(&self, slot: Slot) -> usize {
        self.writes.borrow().get(&slot).copied().unwrap_or(0)
    }

    fn read<T: DeserializeOwned + Default>(&self, slot: Slot) -> Result<T, StoreError> {
        match self.slots.borrow().get(&slot) {
            Some(json) => serde_json::from_str(json).map_err(|e| StoreError::ParseError(slot, e)),
            None => Ok(T::default()),
        }
    }

    fn write<T: Serialize>(&self, slot: Slot, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::EncodeError(slot, e))?;
        self.put_raw(slot, json);
        *self.writes.borrow_mut().entry(slot).or_insert(0) += 1;
        Ok(())
    }
}

impl Store for MemoryStore {
    fn load_favorites(&self) -> Result<FavoriteSet, StoreError> {
        self.read(Slot::Favorites)
    }

    fn save_favorites(&self, favorites: &FavoriteSet) -> Result<(), StoreError> {
        self.write(Slot::Favorites, favorites)
    }

    fn load_shopping(&self) -> Result<ShoppingList, StoreError> {
        self.read(Slot::ShoppingList)
    }

    fn save_shopping(&self, shopping: &ShoppingList) -> Result<(), StoreError> {
        self.write(Slot::ShoppingList, shopping)
    }
}
