//! Unit of Work - centralized repository access.
//!
//! Services reach every repository through this trait so the concrete
//! store can be swapped in tests. Each repository call runs on its own
//! pooled connection; a favorites request is a read followed by at most
//! one write and no transaction spans the two.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    CampsiteRepository, CampsiteStore, FavoriteRepository, FavoriteStore, UserRepository,
    UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get favorites repository
    fn favorites(&self) -> Arc<dyn FavoriteRepository>;

    /// Get campsite repository
    fn campsites(&self) -> Arc<dyn CampsiteRepository>;

    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    favorite_repo: Arc<FavoriteStore>,
    campsite_repo: Arc<CampsiteStore>,
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            favorite_repo: Arc::new(FavoriteStore::new(db.clone())),
            campsite_repo: Arc::new(CampsiteStore::new(db.clone())),
            user_repo: Arc::new(UserStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn favorites(&self) -> Arc<dyn FavoriteRepository> {
        self.favorite_repo.clone()
    }

    fn campsites(&self) -> Arc<dyn CampsiteRepository> {
        self.campsite_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}
