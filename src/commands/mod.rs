mod config_cmd;
mod recipe;
mod search;
mod shopping;

pub use config_cmd::ConfigCommand;
pub use recipe::{FavoriteCommand, FavoritesCommand, ShowCommand};
pub use search::{MoreCommand, SearchCommand};
pub use shopping::ShoppingCommand;

use kitchen_core::{ItemRef, JsonFileStore, KitchenState, Recipe, RecipeId, Session, ShoppingList};

/// The session every command runs against.
pub type KitchenSession = Session<JsonFileStore>;

/// Resolve a recipe reference: a 1-based position in the last search, or
/// a recipe id found in the last search or the favorites.
pub fn resolve_recipe<'a>(
    state: &'a KitchenState,
    reference: &str,
) -> Result<&'a Recipe, Box<dyn std::error::Error>> {
    let reference = reference.trim();
    let results = state.search().results();

    if let Ok(position) = reference.parse::<usize>() {
        if (1..=results.len()).contains(&position) {
            return Ok(&results[position - 1]);
        }
    }

    let id = RecipeId::new(reference);
    state
        .search()
        .get(&id)
        .or_else(|| state.favorites().get(&id))
        .ok_or_else(|| {
            format!(
                "Recipe not found: {}. Use a position from 'kitchen search' or an id from 'kitchen favorites'.",
                reference
            )
            .into()
        })
}

/// Resolve a shopping item reference: an exact item name, or a 1-based position.
pub fn parse_item_ref(list: &ShoppingList, reference: &str) -> ItemRef {
    if list.contains(reference) {
        return ItemRef::Name(reference.to_string());
    }
    match reference.trim().parse::<usize>() {
        Ok(position) if position >= 1 => ItemRef::Position(position - 1),
        _ => ItemRef::Name(reference.to_string()),
    }
}
