mod favorites;
mod recipe;
mod shopping_list;

pub use favorites::FavoriteSet;
pub use recipe::{IngredientSlot, MealRecord, Recipe, RecipeError, RecipeId, INGREDIENT_SLOTS};
pub use shopping_list::{ItemRef, ShoppingError, ShoppingItem, ShoppingList};
