//! Favorites repository - persistence of one record per user.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::favorite::{self, campsites_json, ActiveModel, Entity as FavoriteEntity};
use crate::domain::FavoritesRecord;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Favorites repository trait for dependency injection.
///
/// Every method is a single statement against the store; none of them
/// opens a transaction.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Find the record owned by a user
    async fn find_by_owner(&self, owner: Uuid) -> AppResult<Option<FavoritesRecord>>;

    /// Insert a new record
    async fn create(&self, record: FavoritesRecord) -> AppResult<FavoritesRecord>;

    /// Persist the campsites of an existing record
    async fn save(&self, record: FavoritesRecord) -> AppResult<FavoritesRecord>;

    /// Delete the record owned by a user, returning what was deleted
    async fn find_and_delete_by_owner(&self, owner: Uuid) -> AppResult<Option<FavoritesRecord>>;
}

/// Concrete implementation of FavoriteRepository
pub struct FavoriteStore {
    db: DatabaseConnection,
}

impl FavoriteStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteStore {
    async fn find_by_owner(&self, owner: Uuid) -> AppResult<Option<FavoritesRecord>> {
        FavoriteEntity::find()
            .filter(favorite::Column::UserId.eq(owner))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(FavoritesRecord::try_from)
            .transpose()
    }

    async fn create(&self, record: FavoritesRecord) -> AppResult<FavoritesRecord> {
        let active_model = ActiveModel {
            id: Set(record.id),
            user_id: Set(record.owner),
            campsites: Set(campsites_json(&record.campsites)),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        FavoritesRecord::try_from(model)
    }

    async fn save(&self, record: FavoritesRecord) -> AppResult<FavoritesRecord> {
        let active_model = ActiveModel {
            id: Set(record.id),
            user_id: Set(record.owner),
            campsites: Set(campsites_json(&record.campsites)),
            updated_at: Set(record.updated_at),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(AppError::from)?;
        FavoritesRecord::try_from(model)
    }

    async fn find_and_delete_by_owner(&self, owner: Uuid) -> AppResult<Option<FavoritesRecord>> {
        let Some(model) = FavoriteEntity::find()
            .filter(favorite::Column::UserId.eq(owner))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        else {
            return Ok(None);
        };

        FavoriteEntity::delete_by_id(model.id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        FavoritesRecord::try_from(model).map(Some)
    }
}
