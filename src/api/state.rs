use std::sync::Arc;

use crate::services::{providers::ShowSource, CatalogService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub cors_origins: Vec<String>,
}

impl AppState {
    /// Creates state with an empty catalog backed by the given source
    pub fn new(source: Arc<dyn ShowSource>) -> Self {
        Self::from_catalog(CatalogService::new(source))
    }

    pub fn from_catalog(catalog: CatalogService) -> Self {
        Self {
            catalog,
            cors_origins: vec!["*".to_string()],
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}
