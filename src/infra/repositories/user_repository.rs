//! User lookups used to resolve favorites owners.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use super::entities::user::Entity as UserEntity;
use crate::domain::UserProfile;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Read-only access to user accounts.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user's public profile by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserProfile::from))
    }
}
