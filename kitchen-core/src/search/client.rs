//! HTTP client for TheMealDB search endpoint.

use serde::Deserialize;
use std::time::Duration;

use super::error::SearchError;
use crate::models::Recipe;

/// Public TheMealDB v1 API with the shared test key.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Body of `GET /search.php`. `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    meals: Option<Vec<Recipe>>,
}

/// Client for the recipe search API.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    base_url: String,
    http: reqwest::Client,
}

impl RecipeClient {
    /// Creates a client with reqwest's default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SearchError::Client)?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Searches recipes by name. An empty query returns the API's default feed.
    ///
    /// Returns an empty list when the API reports no matches.
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        let url = self.search_url(query);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(SearchError::Transport)?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let body = response.text().await.map_err(SearchError::Transport)?;
        let recipes = parse_search_body(&body)?;
        tracing::debug!("search '{}' returned {} recipe(s)", query, recipes.len());
        Ok(recipes)
    }

    /// Builds the search URL for a query.
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search.php?s={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }
}

/// Decodes a search response body into recipes (empty when `meals` is null).
pub fn parse_search_body(body: &str) -> Result<Vec<Recipe>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body).map_err(SearchError::Decode)?;
    Ok(response.meals.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn meal(id: &str, name: &str) -> serde_json::Value {
        json!({
            "idMeal": id,
            "strMeal": name,
            "strArea": "British",
            "strIngredient1": "Flour",
            "strMeasure1": "200g"
        })
    }

    #[test]
    fn test_search_url() {
        let client = RecipeClient::new("https://example.com/api/");
        assert_eq!(client.base_url(), "https://example.com/api/");
        assert_eq!(
            client.search_url("fish pie"),
            "https://example.com/api/search.php?s=fish%20pie"
        );
        assert_eq!(client.search_url(""), "https://example.com/api/search.php?s=");
    }

    #[test]
    fn test_parse_null_meals() {
        assert!(parse_search_body(r#"{"meals":null}"#).unwrap().is_empty());
        assert!(parse_search_body("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_body() {
        let err = parse_search_body("<html>oops</html>").unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_returns_recipes_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("s", "pie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meals": [meal("1", "Fish pie"), meal("2", "Apple pie")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = RecipeClient::new(server.uri());
        let recipes = client.search("pie").await.unwrap();

        let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Fish pie", "Apple pie"]);
        assert_eq!(recipes[0].ingredient_lines(), vec!["200g Flour"]);
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
            .mount(&server)
            .await;

        let client = RecipeClient::new(server.uri());
        assert!(client.search("zzzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = RecipeClient::new(server.uri());
        let err = client.search("soup").await.unwrap_err();
        assert!(matches!(err, SearchError::Status(s) if s.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_search_transport_error() {
        // Nothing listens on the discard port.
        let client = RecipeClient::with_timeout("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.search("soup").await.unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }
}
