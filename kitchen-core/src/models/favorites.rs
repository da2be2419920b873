//! User-curated favorite recipes.

use serde::{Deserialize, Serialize};

use super::{Recipe, RecipeId};

/// Favorite recipes keyed by identifier, listed in the order they were added.
///
/// Persists as a JSON array of full recipe records. Restoring keeps the
/// first record for any repeated identifier.
///
/// Equality is set equality: two sets are equal when they hold the same
/// recipes, whatever their listing order. Toggling a recipe off and on
/// again moves it to the end of the listing but leaves the set equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Recipe>", into = "Vec<Recipe>")]
pub struct FavoriteSet {
    recipes: Vec<Recipe>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Remove the recipe if it is a favorite, add it otherwise.
    ///
    /// Returns true if the recipe is a favorite afterwards.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if self.remove(&recipe.id) {
            false
        } else {
            self.recipes.push(recipe.clone());
            true
        }
    }

    /// Returns true if a recipe was removed.
    pub fn remove(&mut self, id: &RecipeId) -> bool {
        let len_before = self.recipes.len();
        self.recipes.retain(|r| &r.id != id);
        self.recipes.len() != len_before
    }
}

impl PartialEq for FavoriteSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .recipes
                .iter()
                .all(|recipe| other.get(&recipe.id) == Some(recipe))
    }
}

impl From<Vec<Recipe>> for FavoriteSet {
    fn from(recipes: Vec<Recipe>) -> Self {
        let mut set = FavoriteSet::new();
        for recipe in recipes {
            if !set.contains(&recipe.id) {
                set.recipes.push(recipe);
            }
        }
        set
    }
}

impl From<FavoriteSet> for Vec<Recipe> {
    fn from(set: FavoriteSet) -> Self {
        set.recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoriteSet::new();
        let soup = Recipe::new("1", "Soup");

        assert!(favorites.toggle(&soup));
        assert!(favorites.contains(&soup.id));

        assert!(!favorites.toggle(&soup));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_prior_state() {
        let mut favorites: FavoriteSet =
            vec![Recipe::new("1", "Soup"), Recipe::new("2", "Stew")].into();
        let before = favorites.clone();
        let pie = Recipe::new("3", "Pie");

        favorites.toggle(&pie);
        favorites.toggle(&pie);
        assert_eq!(favorites, before);

        let soup = Recipe::new("1", "Soup");
        assert!(!favorites.toggle(&soup));
        assert!(favorites.toggle(&soup));
        assert_eq!(favorites, before);

        // Re-adding lists the recipe last.
        let order: Vec<_> = favorites.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["2", "1"]);
    }

    #[test]
    fn test_equality_compares_membership() {
        let soup = Recipe::new("1", "Soup");
        let stew = Recipe::new("2", "Stew");
        let a: FavoriteSet = vec![soup.clone(), stew.clone()].into();
        let b: FavoriteSet = vec![stew.clone(), soup.clone()].into();
        assert_eq!(a, b);

        let renamed: FavoriteSet = vec![Recipe::new("1", "Soup v2"), stew.clone()].into();
        assert_ne!(a, renamed);

        let smaller: FavoriteSet = vec![soup].into();
        assert_ne!(a, smaller);
    }

    #[test]
    fn test_toggle_matches_by_id_only() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(&Recipe::new("7", "Old name"));

        assert!(!favorites.toggle(&Recipe::new("7", "New name")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_restore_drops_repeated_ids() {
        let favorites: FavoriteSet =
            vec![Recipe::new("1", "Soup"), Recipe::new("1", "Soup again")].into();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.recipes()[0].name, "Soup");
    }

    #[test]
    fn test_favorites_json_roundtrip() {
        let favorites: FavoriteSet = vec![
            Recipe::new("1", "Soup").with_ingredient("1 l", "stock"),
            Recipe::new("2", "Stew").with_area("Irish"),
        ]
        .into();

        let json = serde_json::to_string(&favorites).unwrap();
        assert!(json.starts_with("[{"));

        let parsed: FavoriteSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, favorites);
    }
}
