//! JSON file storage, one file per slot in a data directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Slot, Store, StoreError};
use crate::models::{FavoriteSet, ShoppingList};

/// Stores each slot as `<data_dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the full path for a slot.
    pub fn path(&self, slot: Slot) -> PathBuf {
        self.data_dir.join(slot.filename())
    }

    /// Checks if a slot has been written.
    pub fn exists(&self, slot: Slot) -> bool {
        self.path(slot).exists()
    }

    /// Reads a slot. A missing file yields the default value.
    fn read<T: DeserializeOwned + Default>(&self, slot: Slot) -> Result<T, StoreError> {
        let path = self.path(slot);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StoreError::ParseError(slot, e))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(StoreError::IoError(path, e)),
        }
    }

    /// Overwrites a slot with a full snapshot, creating the directory if needed.
    fn write<T: Serialize>(&self, slot: Slot, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StoreError::IoError(self.data_dir.clone(), e))?;

        let path = self.path(slot);
        let json =
            serde_json::to_string_pretty(value).map_err(|e| StoreError::EncodeError(slot, e))?;
        fs::write(&path, json).map_err(|e| StoreError::IoError(path.clone(), e))?;

        tracing::debug!("wrote {}", path.display());
        Ok(())
    }
}

impl Store for JsonFileStore {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Recipe, ShoppingItem};
    use tempfile::TempDir;

    fn test_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        (store, temp_dir)
    }

    #[test]
    fn test_missing_slots_load_empty() {
        let (store, _temp) = test_store();
        assert!(store.load_favorites().unwrap().is_empty());
        assert!(store.load_shopping().unwrap().is_empty());
        assert!(!store.exists(Slot::Favorites));
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested_dir = temp_dir.path().join("nested").join("data");
        let store = JsonFileStore::new(nested_dir.clone());

        store.save_shopping(&ShoppingList::new()).unwrap();

        assert!(nested_dir.exists());
        assert_eq!(store.data_dir(), nested_dir.as_path());
        assert_eq!(store.path(Slot::ShoppingList), nested_dir.join("shopping_list.json"));
        assert!(store.exists(Slot::ShoppingList));
    }

    #[test]
    fn test_favorites_roundtrip() {
        let (store, _temp) = test_store();
        let mut favorites = FavoriteSet::new();
        favorites.toggle(&Recipe::new("52772", "Teriyaki Chicken").with_ingredient("3/4 cup", "soy sauce"));

        store.save_favorites(&favorites).unwrap();
        assert_eq!(store.load_favorites().unwrap(), favorites);
    }

    #[test]
    fn test_shopping_roundtrip() {
        let (store, _temp) = test_store();
        let list: ShoppingList = vec![
            ShoppingItem::with_quantity("Salt", "1 tsp"),
            ShoppingItem::new("Pepper"),
        ]
        .into();

        store.save_shopping(&list).unwrap();
        assert_eq!(store.load_shopping().unwrap(), list);
    }

    #[test]
    fn test_overwrite_existing_slot() {
        let (store, _temp) = test_store();
        store
            .save_shopping(&vec![ShoppingItem::new("Old")].into())
            .unwrap();
        store
            .save_shopping(&vec![ShoppingItem::new("New")].into())
            .unwrap();

        let loaded = store.load_shopping().unwrap();
        assert_eq!(loaded.items(), &[ShoppingItem::new("New")]);
    }

    #[test]
    fn test_slots_are_independent() {
        let (store, _temp) = test_store();
        store
            .save_shopping(&vec![ShoppingItem::new("Eggs")].into())
            .unwrap();
        assert!(!store.exists(Slot::Favorites));
        assert!(store.load_favorites().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_slot_is_an_error() {
        let (store, _temp) = test_store();
        fs::write(store.path(Slot::Favorites), "{not json").unwrap();

        let err = store.load_favorites().unwrap_err();
        assert!(matches!(err, StoreError::ParseError(Slot::Favorites, _)));
        assert!(err.to_string().contains("favorites"));
    }
}
