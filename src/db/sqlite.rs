use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Pool, Sqlite,
};

/// Creates a SQLite connection pool for the given database file
///
/// The database file is created on first use and the schema is applied
/// before the pool is handed out.
pub async fn create_pool(database_path: &str) -> anyhow::Result<Pool<Sqlite>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true),
        )
        .await?;

    apply_schema(&pool).await?;

    Ok(pool)
}

/// Creates an in-memory pool with the schema applied, for tests
pub async fn create_memory_pool() -> anyhow::Result<SqlitePool> {
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    apply_schema(&pool).await?;

    Ok(pool)
}

async fn apply_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    let schema = include_str!("schema.sql");

    for statement in schema.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to apply schema statement '{}': {}", stmt, e))?;
        }
    }

    Ok(())
}
