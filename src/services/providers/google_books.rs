/// Google Books API provider
///
/// Queries the public volumes endpoint; no API key is required for search.
/// Field defaults ("No title" / "No author" / "No category") are applied
/// while converting the raw payload, so downstream code never sees a
/// missing field.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{BookRecommendation, VolumesResponse},
    services::providers::CatalogProvider,
};

#[derive(Clone)]
pub struct GoogleBooksProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GoogleBooksProvider {
    /// Creates a provider against the given API base URL
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for GoogleBooksProvider {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        lang: &str,
    ) -> AppResult<Vec<BookRecommendation>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/volumes", self.api_url);
        let max_results = max_results.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("langRestrict", lang),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Catalog(format!(
                "Google Books API returned status {}: {}",
                status, body
            )));
        }

        let volumes: VolumesResponse = response.json().await?;

        let results: Vec<BookRecommendation> = volumes
            .items
            .into_iter()
            .map(BookRecommendation::from)
            .collect();

        tracing::info!(
            query = %query,
            results = results.len(),
            provider = self.name(),
            "Catalog search completed"
        );

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "google_books"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_rejects_empty_query() {
        let provider = GoogleBooksProvider::new("http://test.local".to_string());

        let result = provider.search("", 10, "en").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_search_rejects_whitespace_query() {
        let provider = GoogleBooksProvider::new("http://test.local".to_string());

        let result = provider.search("   ", 10, "en").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_provider_name() {
        let provider = GoogleBooksProvider::new("http://test.local".to_string());
        assert_eq!(provider.name(), "google_books");
    }
}
