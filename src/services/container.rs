//! Service Container - Centralized service access.
//!
//! Wires the concrete services to one database connection and hands
//! them out behind their traits.

use std::sync::Arc;

use super::{FavoritesManager, FavoritesService, JwtVerifier, TokenVerifier};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get token verification service
    fn tokens(&self) -> Arc<dyn TokenVerifier>;

    /// Get favorites service
    fn favorites(&self) -> Arc<dyn FavoritesService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    token_verifier: Arc<dyn TokenVerifier>,
    favorites_service: Arc<dyn FavoritesService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            token_verifier: Arc::new(JwtVerifier::new(config)),
            favorites_service: Arc::new(FavoritesManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn tokens(&self) -> Arc<dyn TokenVerifier> {
        self.token_verifier.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoritesService> {
        self.favorites_service.clone()
    }
}
