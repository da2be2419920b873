//! Search error types.

use reqwest::StatusCode;

/// Errors that can occur while querying the recipe API.
///
/// These are kept apart for logging; the outcome shown to the user
/// collapses all of them into "no recipes found".
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Failed to build the HTTP client
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Transport failure (DNS, connect, timeout, body read)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API answered with a non-success status
    #[error("recipe API returned status {0}")]
    Status(StatusCode),
    /// The body was not a recipe search response
    #[error("could not decode recipe API response: {0}")]
    Decode(#[source] serde_json::Error),
}
