//! Cache of the most recent search, so later commands can refer to results
//! by position.
//!
//! Unlike favorites and the shopping list this is not user data; a missing
//! or unreadable cache just means there is no previous search.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use kitchen_core::{Recipe, SearchView};

const FILENAME: &str = "last_search.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSearch {
    pub query: String,
    pub visible: usize,
    pub recipes: Vec<Recipe>,
}

impl LastSearch {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(FILENAME)
    }

    /// Captures a finished search view.
    pub fn from_view(view: &SearchView) -> Self {
        Self {
            query: view.query().unwrap_or_default().to_string(),
            visible: view.visible_count(),
            recipes: view.results().to_vec(),
        }
    }

    /// Rebuilds the view on top of an empty one with the configured paging.
    pub fn into_view(self, empty: SearchView) -> SearchView {
        empty.restored(self.query, self.recipes, self.visible)
    }

    /// Loads the cache, or `None` if there is none or it cannot be read.
    pub fn load(data_dir: &Path) -> Option<Self> {
        let path = Self::path(data_dir);
        let contents = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(last) => Some(last),
            Err(e) => {
                tracing::warn!("ignoring unreadable {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
        fs::create_dir_all(data_dir)?;
        fs::write(Self::path(data_dir), serde_json::to_string(self)?)?;
        Ok(())
    }
}
