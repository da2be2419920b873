use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod config;
mod last_search;

use commands::{
    ConfigCommand, FavoriteCommand, FavoritesCommand, KitchenSession, MoreCommand, SearchCommand,
    ShoppingCommand, ShowCommand,
};
use config::Config;
use kitchen_core::{JsonFileStore, RecipeClient, SearchView, Session};
use last_search::LastSearch;

#[derive(Parser)]
#[command(name = "kitchen")]
#[command(version)]
#[command(about = "Find recipes, keep favorites and build a shopping list", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes by name (no query browses popular recipes)
    Search(SearchCommand),

    /// Show more results from the last search
    More(MoreCommand),

    /// Show a recipe's ingredients and instructions
    Show(ShowCommand),

    /// Add a recipe to favorites, or remove it if already there
    Favorite(FavoriteCommand),

    /// List favorite recipes
    Favorites(FavoritesCommand),

    /// Manage the shopping list
    Shopping(ShoppingCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Save config path for init command
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Search(cmd)) => {
            let mut session = open_session(&config)?;
            let client = RecipeClient::with_timeout(
                config.api_base_url.value.clone(),
                Duration::from_secs(config.request_timeout_secs.value),
            )?;
            cmd.run(&mut session, &client, &config).await?;
        }
        Some(Commands::More(cmd)) => {
            let mut session = open_session(&config)?;
            cmd.run(&mut session, &config)?;
        }
        Some(Commands::Show(cmd)) => {
            cmd.run(&open_session(&config)?)?;
        }
        Some(Commands::Favorite(cmd)) => {
            let mut session = open_session(&config)?;
            cmd.run(&mut session)?;
        }
        Some(Commands::Favorites(cmd)) => {
            cmd.run(&open_session(&config)?)?;
        }
        Some(Commands::Shopping(cmd)) => {
            let mut session = open_session(&config)?;
            cmd.run(&mut session)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config, cli_config_path)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "kitchen_companion=debug,kitchen_core=debug"
    } else {
        "kitchen_companion=warn,kitchen_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Restores favorites, the shopping list and the last search.
fn open_session(config: &Config) -> Result<KitchenSession, Box<dyn std::error::Error>> {
    let data_dir = &config.data_dir.value;
    let mut session = Session::open(JsonFileStore::new(data_dir.clone()))?;

    let empty = SearchView::with_paging(config.page_size.value, config.page_step.value);
    if let Some(last) = LastSearch::load(data_dir) {
        session.restore_search(last.into_view(empty));
    } else {
        session.restore_search(empty);
    }

    Ok(session)
}
