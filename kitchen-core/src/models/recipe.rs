//! Recipe records as returned by TheMealDB.
//!
//! The API returns each meal as a flat object of string-or-null values,
//! with twenty numbered ingredient/measure pairs. `Recipe` gives those
//! fields names and keeps anything it does not interpret in `extra`, so a
//! recipe written back out has the same shape it arrived in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ingredients;

/// Number of ingredient/measure pairs on a meal record.
pub const INGREDIENT_SLOTS: usize = 20;

const ID: &str = "idMeal";
const NAME: &str = "strMeal";
const THUMBNAIL: &str = "strMealThumb";
const CATEGORY: &str = "strCategory";
const AREA: &str = "strArea";
const INSTRUCTIONS: &str = "strInstructions";
const TAGS: &str = "strTags";
const YOUTUBE: &str = "strYoutube";
const SOURCE: &str = "strSource";

/// Opaque recipe identifier (`idMeal`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One numbered ingredient/measure pair, exactly as the API sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

/// Errors decoding a meal record into a [`Recipe`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecipeError {
    #[error("meal record is missing required field `{0}`")]
    MissingField(&'static str),
}

/// The flat wire form of a meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealRecord(BTreeMap<String, Option<String>>);

impl MealRecord {
    fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key).flatten()
    }

    fn take_required(&mut self, key: &'static str) -> Result<String, RecipeError> {
        self.take(key).ok_or(RecipeError::MissingField(key))
    }

    fn put(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }
}

/// A dish from the recipe API. Read-only from the client's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MealRecord", into = "MealRecord")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    /// Comma separated, as sent by the API. See [`Recipe::tags`].
    pub tags: Option<String>,
    pub video_url: Option<String>,
    pub source_url: Option<String>,
    /// Always [`INGREDIENT_SLOTS`] long, in slot order.
    pub slots: Vec<IngredientSlot>,
    /// Fields the client does not interpret.
    pub extra: BTreeMap<String, Option<String>>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RecipeId::new(id),
            name: name.into(),
            thumbnail: None,
            category: None,
            area: None,
            instructions: None,
            tags: None,
            video_url: None,
            source_url: None,
            slots: vec![IngredientSlot::default(); INGREDIENT_SLOTS],
            extra: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Fills the first empty slot. Extra pairs beyond the slot count are dropped.
    pub fn with_ingredient(mut self, measure: impl Into<String>, ingredient: impl Into<String>) -> Self {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.ingredient.is_none()) {
            slot.ingredient = Some(ingredient.into());
            slot.measure = Some(measure.into());
        }
        self
    }

    /// Tags split on commas, trimmed, empty parts dropped.
    pub fn tags(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|t| t.split(',').map(str::trim).filter(|t| !t.is_empty()).collect())
            .unwrap_or_default()
    }

    /// "<category> • <area>", omitting whichever part is missing.
    pub fn summary(&self) -> String {
        [self.category.as_deref(), self.area.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" • ")
    }

    /// See [`ingredients::ingredient_lines`].
    pub fn ingredient_lines(&self) -> Vec<String> {
        ingredients::ingredient_lines(self)
    }

    /// See [`ingredients::video_token`].
    pub fn video_token(&self) -> Option<&str> {
        ingredients::video_token(self.video_url.as_deref())
    }
}

impl TryFrom<MealRecord> for Recipe {
    type Error = RecipeError;

    fn try_from(mut record: MealRecord) -> Result<Self, Self::Error> {
        let id = RecipeId::new(record.take_required(ID)?);
        let name = record.take_required(NAME)?;

        let slots = (1..=INGREDIENT_SLOTS)
            .map(|n| IngredientSlot {
                ingredient: record.take(&format!("strIngredient{}", n)),
                measure: record.take(&format!("strMeasure{}", n)),
            })
            .collect();

        Ok(Self {
            id,
            name,
            thumbnail: record.take(THUMBNAIL),
            category: record.take(CATEGORY),
            area: record.take(AREA),
            instructions: record.take(INSTRUCTIONS),
            tags: record.take(TAGS),
            video_url: record.take(YOUTUBE),
            source_url: record.take(SOURCE),
            slots,
            extra: record.0,
        })
    }
}

impl From<Recipe> for MealRecord {
    fn from(recipe: Recipe) -> Self {
        let mut record = MealRecord(recipe.extra);
        record.put(ID, Some(recipe.id.0));
        record.put(NAME, Some(recipe.name));
        record.put(THUMBNAIL, recipe.thumbnail);
        record.put(CATEGORY, recipe.category);
        record.put(AREA, recipe.area);
        record.put(INSTRUCTIONS, recipe.instructions);
        record.put(TAGS, recipe.tags);
        record.put(YOUTUBE, recipe.video_url);
        record.put(SOURCE, recipe.source_url);
        for (i, slot) in recipe.slots.into_iter().enumerate() {
            record.put(format!("strIngredient{}", i + 1), slot.ingredient);
            record.put(format!("strMeasure{}", i + 1), slot.measure);
        }
        record
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count()))?;

        let summary = self.summary();
        if !summary.is_empty() {
            writeln!(f, "{}", summary)?;
        }

        let tags = self.tags();
        if !tags.is_empty() {
            writeln!(f, "Tags: {}", tags.join(", "))?;
        }

        let lines = self.ingredient_lines();
        if !lines.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for line in &lines {
                writeln!(f, "  - {}", line)?;
            }
        }

        if let Some(instructions) = self.instructions.as_deref().filter(|i| !i.trim().is_empty()) {
            writeln!(f, "\nInstructions:\n{}", instructions.trim())?;
        }

        if let Some(token) = self.video_token() {
            writeln!(f, "\nVideo: {}", ingredients::embed_url(token))?;
        }

        if let Some(source) = &self.source_url {
            writeln!(f, "Source: {}", source)?;
        }

        Ok(())
    }
}
