//! Campsite lookups used to resolve favorites.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::campsite::{self, Entity as CampsiteEntity};
use crate::domain::{Campsite, CampsiteId};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Read-only access to the campsite catalogue.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CampsiteRepository: Send + Sync {
    /// Fetch the campsites that exist among `ids`, in no particular order
    async fn find_by_ids(&self, ids: Vec<CampsiteId>) -> AppResult<Vec<Campsite>>;
}

/// Concrete implementation of CampsiteRepository
pub struct CampsiteStore {
    db: DatabaseConnection,
}

impl CampsiteStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CampsiteRepository for CampsiteStore {
    async fn find_by_ids(&self, ids: Vec<CampsiteId>) -> AppResult<Vec<Campsite>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = CampsiteEntity::find()
            .filter(campsite::Column::Id.is_in(ids.into_iter().map(CampsiteId::into_inner)))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Campsite::from).collect())
    }
}
