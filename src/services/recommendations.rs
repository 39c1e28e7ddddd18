use std::collections::HashSet;

use crate::{
    error::AppResult,
    models::{BookRecommendation, ReadBook},
    services::{preferences, providers::CatalogProvider},
};

/// Result cap applied to each of the two catalog queries
const RESULTS_PER_QUERY: u32 = 10;

/// Language restriction applied to both catalog queries
const CATALOG_LANG: &str = "en";

/// Generates book recommendations from a reading history
///
/// Derives the dominant author and category from the given snapshot, then
/// issues two catalog queries (`inauthor:` and `subject:`) and merges the
/// results: author results first, then only the category results not
/// already present. Two results are duplicates only when title, authors and
/// categories all match exactly.
///
/// A failed catalog query degrades to an empty result list for that query;
/// the call as a whole only reports an error for an empty history, which
/// propagates without touching the catalog.
#[tracing::instrument(skip_all, fields(history = books.len()))]
pub async fn recommend(
    books: &[ReadBook],
    catalog: &dyn CatalogProvider,
) -> AppResult<Vec<BookRecommendation>> {
    let profile = preferences::compute_profile(books)?;

    let author_query = format!("inauthor:{}", profile.favorite_author);
    let category_query = format!("subject:{}", profile.favorite_category);

    let by_author = run_query(catalog, &author_query).await;
    let by_category = run_query(catalog, &category_query).await;

    let recommendations = merge_unique(by_author, by_category);

    tracing::info!(
        favorite_author = %profile.favorite_author,
        favorite_category = %profile.favorite_category,
        results = recommendations.len(),
        "Recommendations computed"
    );

    Ok(recommendations)
}

/// Runs one catalog query, absorbing failures into an empty result list
async fn run_query(catalog: &dyn CatalogProvider, query: &str) -> Vec<BookRecommendation> {
    match catalog.search(query, RESULTS_PER_QUERY, CATALOG_LANG).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(
                error = %e,
                query = %query,
                "Catalog query failed, continuing without its results"
            );
            Vec::new()
        }
    }
}

/// Concatenates both result lists, keeping one entry per
/// (title, authors, categories) triple in stable order
fn merge_unique(
    by_author: Vec<BookRecommendation>,
    by_category: Vec<BookRecommendation>,
) -> Vec<BookRecommendation> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(by_author.len() + by_category.len());

    for rec in by_author.into_iter().chain(by_category) {
        if seen.insert(rec.clone()) {
            merged.push(rec);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, services::providers::MockCatalogProvider};
    use chrono::Utc;

    fn book(title: &str, author: &str, category: &str) -> ReadBook {
        ReadBook {
            id: 0,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            added_at: Utc::now(),
        }
    }

    fn rec(title: &str) -> BookRecommendation {
        BookRecommendation {
            title: title.to_string(),
            authors: "Frank Herbert".to_string(),
            categories: "Fiction".to_string(),
        }
    }

    fn herbert_history() -> Vec<ReadBook> {
        vec![
            book("Dune", "Frank Herbert", "Sci-Fi"),
            book("Dune Messiah", "Frank Herbert", "Sci-Fi"),
            book("1984", "George Orwell", "Dystopia"),
        ]
    }

    #[tokio::test]
    async fn test_empty_history_skips_the_catalog() {
        let mut catalog = MockCatalogProvider::new();
        catalog.expect_search().never();

        let result = recommend(&[], &catalog).await;
        assert!(matches!(result, Err(AppError::EmptyHistory)));
    }

    #[tokio::test]
    async fn test_queries_use_profile_and_defaults() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search()
            .withf(|query: &str, max_results: &u32, lang: &str| {
                query == "inauthor:Frank Herbert" && *max_results == 10 && lang == "en"
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![rec("Children of Dune")]));
        catalog
            .expect_search()
            .withf(|query: &str, max_results: &u32, lang: &str| {
                query == "subject:Sci-Fi" && *max_results == 10 && lang == "en"
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![rec("Hyperion")]));

        let results = recommend(&herbert_history(), &catalog).await.unwrap();
        assert_eq!(results, vec![rec("Children of Dune"), rec("Hyperion")]);
    }

    #[tokio::test]
    async fn test_duplicate_triples_are_collapsed() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search()
            .withf(|query: &str, _: &u32, _: &str| query.starts_with("inauthor:"))
            .returning(|_, _, _| Ok(vec![rec("Children of Dune"), rec("Dune Messiah")]));
        catalog
            .expect_search()
            .withf(|query: &str, _: &u32, _: &str| query.starts_with("subject:"))
            .returning(|_, _, _| Ok(vec![rec("Dune Messiah"), rec("Hyperion")]));

        let results = recommend(&herbert_history(), &catalog).await.unwrap();
        assert_eq!(
            results,
            vec![rec("Children of Dune"), rec("Dune Messiah"), rec("Hyperion")]
        );
    }

    #[tokio::test]
    async fn test_triples_differing_in_one_field_both_survive() {
        let same_title_other_author = BookRecommendation {
            authors: "Brian Herbert".to_string(),
            ..rec("Dune Messiah")
        };
        let expected = vec![rec("Dune Messiah"), same_title_other_author.clone()];

        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search()
            .withf(|query: &str, _: &u32, _: &str| query.starts_with("inauthor:"))
            .returning(|_, _, _| Ok(vec![rec("Dune Messiah")]));
        catalog
            .expect_search()
            .withf(|query: &str, _: &u32, _: &str| query.starts_with("subject:"))
            .returning(move |_, _, _| Ok(vec![same_title_other_author.clone()]));

        let results = recommend(&herbert_history(), &catalog).await.unwrap();
        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn test_failed_author_query_degrades_to_category_results() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search()
            .withf(|query: &str, _: &u32, _: &str| query.starts_with("inauthor:"))
            .times(1)
            .returning(|_, _, _| Err(AppError::Catalog("upstream 500".to_string())));
        catalog
            .expect_search()
            .withf(|query: &str, _: &u32, _: &str| query.starts_with("subject:"))
            .times(1)
            .returning(|_, _, _| Ok(vec![rec("Hyperion"), rec("Hyperion")]));

        let results = recommend(&herbert_history(), &catalog).await.unwrap();
        // Deduplicated category results only, no error
        assert_eq!(results, vec![rec("Hyperion")]);
    }

    #[tokio::test]
    async fn test_both_queries_failing_yields_empty_list() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search()
            .times(2)
            .returning(|_, _, _| Err(AppError::Catalog("connection refused".to_string())));

        let results = recommend(&herbert_history(), &catalog).await.unwrap();
        assert!(results.is_empty());
    }
}
