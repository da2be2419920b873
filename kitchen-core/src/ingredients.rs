//! Derivations over a recipe's free-text fields.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Recipe, ShoppingItem};

static VIDEO_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video token pattern is valid"));

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Ingredient lines in slot order, each "<measure> <ingredient>".
///
/// Slots whose ingredient is missing or blank are skipped. A blank measure
/// yields just the ingredient.
pub fn ingredient_lines(recipe: &Recipe) -> Vec<String> {
    recipe
        .slots
        .iter()
        .filter_map(|slot| {
            let ingredient = slot.ingredient.as_deref().map(str::trim).filter(|i| !i.is_empty())?;
            let measure = slot.measure.as_deref().map(str::trim).unwrap_or_default();
            Some(if measure.is_empty() {
                ingredient.to_string()
            } else {
                format!("{} {}", measure, ingredient)
            })
        })
        .collect()
}

/// Shopping list candidates for a recipe: one per ingredient line, with the
/// whole line as the name and an empty quantity.
pub fn shopping_candidates(recipe: &Recipe) -> Vec<ShoppingItem> {
    ingredient_lines(recipe)
        .into_iter()
        .map(ShoppingItem::new)
        .collect()
}

/// The 11-character video token in a YouTube URL, if there is one.
pub fn video_token(url: Option<&str>) -> Option<&str> {
    let url = url?;
    VIDEO_TOKEN
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Embeddable player URL for a video token.
pub fn embed_url(token: &str) -> String {
    format!("{}{}", EMBED_BASE, token)
}
