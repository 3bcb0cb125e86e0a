//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{FavoritesService, ServiceContainer, Services, TokenVerifier};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Bearer token verification
    pub token_verifier: Arc<dyn TokenVerifier>,
    /// Favorites use cases
    pub favorites_service: Arc<dyn FavoritesService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            token_verifier: container.tokens(),
            favorites_service: container.favorites(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        token_verifier: Arc<dyn TokenVerifier>,
        favorites_service: Arc<dyn FavoritesService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            token_verifier,
            favorites_service,
            database,
        }
    }
}
