/// Book catalog provider abstraction
///
/// The recommendation engine talks to the external catalog through this
/// trait; the Google Books implementation lives alongside it. Transport
/// details (HTTP, timeouts) stay inside the provider.
use crate::{error::AppResult, models::BookRecommendation};

pub mod google_books;

/// Trait for book catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Searches the catalog
    ///
    /// `query` uses the remote service's query grammar (`inauthor:<name>`,
    /// `subject:<name>`, or free text), `max_results` caps the result list
    /// and `lang` restricts results to one language code.
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        lang: &str,
    ) -> AppResult<Vec<BookRecommendation>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
