use axum::{extract::State, Json};

use crate::{
    error::AppResult, models::BookRecommendation, services::recommendations, state::AppState,
};

/// Handler for the recommendations endpoint
///
/// Takes one snapshot of the shelf and passes it into the engine; nothing
/// is cached between requests.
pub async fn recommend(State(state): State<AppState>) -> AppResult<Json<Vec<BookRecommendation>>> {
    let books = state.store.list_all().await?;
    let recommendations = recommendations::recommend(&books, state.catalog.as_ref()).await?;
    Ok(Json(recommendations))
}
