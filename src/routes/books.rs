use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{BookDraft, ReadBook},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
}

impl BookForm {
    /// Applies the input defaults: a blank title is rejected, blank author
    /// and category fall back to "Unknown"
    fn into_draft(self) -> AppResult<BookDraft> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::InvalidInput(
                "Please enter the book title".to_string(),
            ));
        }

        Ok(BookDraft {
            title,
            author: field_or_unknown(self.author),
            category: field_or_unknown(self.category),
        })
    }
}

fn field_or_unknown(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Handler: list all read books
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ReadBook>>> {
    let books = state.store.list_all().await?;
    Ok(Json(books))
}

/// Handler: record a read book
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<BookForm>,
) -> AppResult<(StatusCode, Json<ReadBook>)> {
    let book = state.store.insert(form.into_draft()?).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Handler: rewrite an existing read book
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<BookForm>,
) -> AppResult<Json<ReadBook>> {
    let book = state.store.update(id, form.into_draft()?).await?;
    Ok(Json(book))
}

/// Handler: delete a read book
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
