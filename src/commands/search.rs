//! Recipe search commands.

use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::last_search::LastSearch;
use kitchen_core::search::{NO_RESULTS_MESSAGE, NO_RESULTS_TITLE, SUGGESTIONS};
use kitchen_core::{Action, KitchenState, Recipe, RecipeClient, SearchStatus};

use super::KitchenSession;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct SearchCommand {
    /// Recipe name to search for (omit to browse popular recipes)
    pub query: Vec<String>,

    /// Show every result instead of the first page
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct MoreCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl SearchCommand {
    pub async fn run(
        &self,
        session: &mut KitchenSession,
        client: &RecipeClient,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let query = if self.query.is_empty() {
            String::new()
        } else {
            let joined = self.query.join(" ");
            let trimmed = joined.trim();
            if trimmed.is_empty() {
                return Err("Search query cannot be empty".into());
            }
            trimmed.to_string()
        };

        session.search(client, &query).await?;
        LastSearch::from_view(session.state().search()).save(&config.data_dir.value)?;

        print_results(session.state(), self.all, 0, &self.format)
    }
}

impl MoreCommand {
    pub fn run(
        &self,
        session: &mut KitchenSession,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if session.state().search().query().is_none() {
            return Err("No previous search. Run 'kitchen search' first.".into());
        }

        let already_shown = session.state().search().visible().len();
        if !session.state().search().has_more() {
            println!("All {} results are already shown.", already_shown);
            return Ok(());
        }

        session.dispatch(Action::ShowMore)?;
        LastSearch::from_view(session.state().search()).save(&config.data_dir.value)?;

        print_results(session.state(), false, already_shown, &self.format)
    }
}

/// Print the visible results, starting at `skip`.
fn print_results(
    state: &KitchenState,
    all: bool,
    skip: usize,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = state.search();
    let shown: &[Recipe] = if all { view.results() } else { view.visible() };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": view.query(),
                "total": view.results().len(),
                "has_more": !all && view.has_more(),
                "recipes": shown.iter().enumerate().skip(skip).map(|(i, r)| serde_json::json!({
                    "position": i + 1,
                    "id": r.id,
                    "name": r.name,
                    "category": r.category,
                    "area": r.area,
                    "favorite": state.is_favorite(&r.id),
                })).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            for line in text_lines(state, all, skip) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Text rendering of the results, numbering cards from `skip + 1`.
fn text_lines(state: &KitchenState, all: bool, skip: usize) -> Vec<String> {
    let view = state.search();
    if view.status() == &SearchStatus::NoResults {
        return no_results_lines();
    }

    let shown: &[Recipe] = if all { view.results() } else { view.visible() };
    let mut lines = Vec::new();

    if skip == 0 {
        lines.push(match view.query() {
            Some(q) if !q.is_empty() => format!("Recipes for \"{}\"", q),
            _ => "Popular recipes".to_string(),
        });
        lines.push("=".repeat(44));
    }

    for (i, recipe) in shown.iter().enumerate().skip(skip) {
        let heart = if state.is_favorite(&recipe.id) { "♥" } else { " " };
        lines.push(format!(
            "{:>3}. {} {:<36} {:<12} [{}]",
            i + 1,
            heart,
            recipe.name,
            recipe.area.as_deref().unwrap_or(""),
            recipe.id
        ));
    }

    lines.push("-".repeat(44));
    lines.push(format!(
        "Showing {} of {} recipes",
        shown.len(),
        view.results().len()
    ));
    if !all && view.has_more() {
        lines.push("Run 'kitchen more' to see more.".to_string());
    }
    lines
}

fn no_results_lines() -> Vec<String> {
    let mut lines = vec![
        NO_RESULTS_TITLE.to_string(),
        "=".repeat(NO_RESULTS_TITLE.len()),
        NO_RESULTS_MESSAGE.to_string(),
        String::new(),
    ];
    lines.extend(
        SUGGESTIONS
            .iter()
            .map(|suggestion| format!("  kitchen search {}", suggestion)),
    );
    lines
}
