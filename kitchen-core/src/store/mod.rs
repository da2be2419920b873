//! Persistence boundary for the favorites and shopping collections.
//!
//! Each collection lives in its own named slot holding the JSON-serialized
//! collection. Slots are read once when a session starts and overwritten
//! with a full snapshot after each change to that collection.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::io;
use std::path::PathBuf;

use crate::models::{FavoriteSet, ShoppingList};

/// A named persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Favorites,
    ShoppingList,
}

impl Slot {
    /// Slot key, also used as the file stem on disk.
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Favorites => "favorites",
            Slot::ShoppingList => "shopping_list",
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.json", self.key())
    }
}

/// Storage for the persisted collections.
///
/// An empty slot restores an empty collection.
pub trait Store {
    fn load_favorites(&self) -> Result<FavoriteSet, StoreError>;
    fn save_favorites(&self, favorites: &FavoriteSet) -> Result<(), StoreError>;
    fn load_shopping(&self) -> Result<ShoppingList, StoreError>;
    fn save_shopping(&self, shopping: &ShoppingList) -> Result<(), StoreError>;
}

/// Errors that can occur reading or writing a slot.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error reading or writing a slot file.
    IoError(PathBuf, io::Error),
    /// Slot contents are not a valid collection.
    ParseError(Slot, serde_json::Error),
    /// Collection could not be serialized.
    EncodeError(Slot, serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(path, e) => {
                write!(f, "I/O error for {}: {}", path.display(), e)
            }
            StoreError::ParseError(slot, e) => {
                write!(f, "Failed to read saved {}: {}", slot.key(), e)
            }
            StoreError::EncodeError(slot, e) => {
                write!(f, "Failed to encode {}: {}", slot.key(), e)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::IoError(_, e) => Some(e),
            StoreError::ParseError(_, e) | StoreError::EncodeError(_, e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_filename() {
        assert_eq!(Slot::Favorites.filename(), "favorites.json");
        assert_eq!(Slot::ShoppingList.filename(), "shopping_list.json");
    }
}
