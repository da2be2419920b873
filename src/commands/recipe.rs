use clap::{Args, ValueEnum};

use kitchen_core::{embed_url, Change, Recipe};

use super::{resolve_recipe, KitchenSession};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ShowCommand {
    /// Position in the last search, or recipe id
    pub recipe: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct FavoriteCommand {
    /// Position in the last search, or recipe id
    pub recipe: String,
}

#[derive(Args)]
pub struct FavoritesCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ShowCommand {
    pub fn run(&self, session: &KitchenSession) -> Result<(), Box<dyn std::error::Error>> {
        let state = session.state();
        let recipe = resolve_recipe(state, &self.recipe)?;

        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "id": recipe.id,
                    "name": recipe.name,
                    "category": recipe.category,
                    "area": recipe.area,
                    "tags": recipe.tags(),
                    "thumbnail": recipe.thumbnail,
                    "ingredients": recipe.ingredient_lines(),
                    "instructions": recipe.instructions,
                    "video": recipe.video_token().map(embed_url),
                    "source": recipe.source_url,
                    "favorite": state.is_favorite(&recipe.id),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                print!("{}", recipe);
                if state.is_favorite(&recipe.id) {
                    println!("\n♥ In your favorites");
                }
            }
        }
        Ok(())
    }
}

impl FavoriteCommand {
    pub fn run(&self, session: &mut KitchenSession) -> Result<(), Box<dyn std::error::Error>> {
        let recipe = resolve_recipe(session.state(), &self.recipe)?;
        let (id, name) = (recipe.id.clone(), recipe.name.clone());

        let transition = session.toggle_favorite(&id)?;
        match transition.change {
            Change::FavoriteAdded(_) => println!("Added '{}' to favorites", name),
            Change::FavoriteRemoved(_) => println!("Removed '{}' from favorites", name),
            _ => {}
        }
        Ok(())
    }
}

impl FavoritesCommand {
    pub fn run(&self, session: &KitchenSession) -> Result<(), Box<dyn std::error::Error>> {
        let favorites = session.state().favorites();

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(favorites)?);
            }
            OutputFormat::Text => {
                println!("Your Favorites");
                println!("{}", "=".repeat(44));
                if favorites.is_empty() {
                    println!("You don't have any favorite recipes yet.");
                    println!("Run 'kitchen favorite <RECIPE>' to add one.");
                } else {
                    for recipe in favorites.recipes() {
                        print_card(recipe);
                    }
                }
            }
        }
        Ok(())
    }
}

fn print_card(recipe: &Recipe) {
    println!(
        "  ♥ {:<36} {:<12} [{}]",
        recipe.name,
        recipe.area.as_deref().unwrap_or(""),
        recipe.id
    );
}
