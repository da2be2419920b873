//! Kitchen Companion core library
//!
//! Recipe models, ingredient extraction, favorites, the shopping list,
//! the client state container and the recipe search client.

pub mod ingredients;
pub mod models;
pub mod search;
pub mod session;
pub mod state;
pub mod store;

pub use ingredients::{embed_url, ingredient_lines, shopping_candidates, video_token};
pub use models::{
    FavoriteSet, IngredientSlot, ItemRef, Recipe, RecipeError, RecipeId, ShoppingError,
    ShoppingItem, ShoppingList, INGREDIENT_SLOTS,
};
pub use search::{RecipeClient, SearchError, SearchOutcome, SearchTicket, DEFAULT_BASE_URL};
pub use session::{Session, SessionError};
pub use state::{Action, Change, KitchenState, SearchStatus, SearchView, Transition};
pub use store::{JsonFileStore, MemoryStore, Slot, Store, StoreError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
