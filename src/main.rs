use std::sync::Arc;

use bookshelf_api::{
    config::Config,
    db::{create_pool, SqliteBookStore},
    routes::create_router,
    services::providers::google_books::GoogleBooksProvider,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let pool = create_pool(&config.database_path).await?;
    let store = Arc::new(SqliteBookStore::new(pool));
    let catalog = Arc::new(GoogleBooksProvider::new(config.catalog_api_url.clone()));

    let state = AppState::new(store, catalog);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Bookshelf API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
