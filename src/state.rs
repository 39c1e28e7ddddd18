use std::sync::Arc;

use crate::{db::BookStore, services::providers::CatalogProvider};

/// Shared application state
///
/// Both collaborators sit behind trait objects so tests can swap in stubs
/// for the store and the catalog.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookStore>,
    pub catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { store, catalog }
    }
}
