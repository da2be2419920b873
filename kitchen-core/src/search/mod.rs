//! Recipe search: the API client and the outcome types the state consumes.
//!
//! Each search is issued with a [`SearchTicket`]. Only the completion
//! carrying the most recently issued ticket updates the results, so a slow
//! response to an old query cannot replace the results of a newer one.

mod client;
mod error;

pub use client::{parse_search_body, RecipeClient, DEFAULT_BASE_URL};
pub use error::SearchError;

use crate::models::Recipe;

/// Title shown when a search produced nothing to display.
pub const NO_RESULTS_TITLE: &str = "No Recipes Found";
pub const NO_RESULTS_MESSAGE: &str = "We couldn't find any meals for your search. Try checking your spelling or explore some popular options below:";
/// Queries offered when a search produced nothing to display.
pub const SUGGESTIONS: [&str; 4] = ["Chicken", "Pasta", "Soup", "Beef"];

/// Identifies one issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// What a finished search produced.
///
/// `NoResults` and `Failed` render the same way; the failure reason is kept
/// only for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<Recipe>),
    NoResults,
    Failed(String),
}

impl SearchOutcome {
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            SearchOutcome::Found(recipes) => recipes,
            SearchOutcome::NoResults | SearchOutcome::Failed(_) => &[],
        }
    }
}

impl From<Result<Vec<Recipe>, SearchError>> for SearchOutcome {
    fn from(result: Result<Vec<Recipe>, SearchError>) -> Self {
        match result {
            Ok(recipes) if recipes.is_empty() => SearchOutcome::NoResults,
            Ok(recipes) => SearchOutcome::Found(recipes),
            Err(e) => {
                tracing::warn!("recipe search failed: {}", e);
                SearchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_empty_result() {
        let outcome: SearchOutcome = Ok(Vec::new()).into();
        assert_eq!(outcome, SearchOutcome::NoResults);
        assert!(outcome.recipes().is_empty());
    }

    #[test]
    fn test_outcome_from_recipes() {
        let outcome: SearchOutcome = Ok(vec![Recipe::new("1", "Soup")]).into();
        assert_eq!(outcome.recipes().len(), 1);
    }

    #[test]
    fn test_outcome_from_error() {
        let err = parse_search_body("not json").unwrap_err();
        let outcome: SearchOutcome = Err(err).into();
        assert!(matches!(outcome, SearchOutcome::Failed(ref m) if m.contains("decode")));
        assert!(outcome.recipes().is_empty());
    }
}
