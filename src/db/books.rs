use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::{BookDraft, ReadBook},
};

/// Trait for read-book record stores
///
/// The recommendation core only consumes `list_all`; the remaining CRUD
/// operations back the HTTP surface. Identifiers are assigned by the store
/// on insert and stay stable for the record's lifetime.
#[async_trait::async_trait]
pub trait BookStore: Send + Sync {
    /// Inserts a new record and returns it with its assigned id
    async fn insert(&self, draft: BookDraft) -> AppResult<ReadBook>;

    /// Rewrites an existing record in place
    ///
    /// Returns `NotFound` when no record has the given id.
    async fn update(&self, id: i64, draft: BookDraft) -> AppResult<ReadBook>;

    /// Removes a record
    ///
    /// Returns `NotFound` when no record has the given id.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Returns a snapshot of all current records, ordered by id
    async fn list_all(&self) -> AppResult<Vec<ReadBook>>;
}

/// SQLite-backed record store
#[derive(Clone)]
pub struct SqliteBookStore {
    pool: SqlitePool,
}

impl SqliteBookStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BookStore for SqliteBookStore {
    async fn insert(&self, draft: BookDraft) -> AppResult<ReadBook> {
        let book = sqlx::query_as::<_, ReadBook>(
            r#"
            INSERT INTO read_books (title, author, category, added_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, title, author, category, added_at
            "#,
        )
        .bind(draft.title)
        .bind(draft.author)
        .bind(draft.category)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    async fn update(&self, id: i64, draft: BookDraft) -> AppResult<ReadBook> {
        let book = sqlx::query_as::<_, ReadBook>(
            r#"
            UPDATE read_books
            SET title = ?1, author = ?2, category = ?3
            WHERE id = ?4
            RETURNING id, title, author, category, added_at
            "#,
        )
        .bind(draft.title)
        .bind(draft.author)
        .bind(draft.category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        book.ok_or_else(|| AppError::NotFound(format!("No read book with id {}", id)))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM read_books WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No read book with id {}", id)));
        }

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<ReadBook>> {
        let books = sqlx::query_as::<_, ReadBook>(
            "SELECT id, title, author, category, added_at FROM read_books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }
}
