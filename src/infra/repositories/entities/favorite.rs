//! Favorites database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{CampsiteId, FavoritesRecord};
use crate::errors::AppError;

/// One row per user; campsite ids are kept as an ordered JSON array.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub campsites: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for FavoritesRecord {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let campsites: Vec<CampsiteId> = serde_json::from_value(model.campsites).map_err(|e| {
            AppError::internal(format!(
                "Corrupt campsites column for favorites {}: {}",
                model.id, e
            ))
        })?;

        Ok(Self {
            id: model.id,
            owner: model.user_id,
            campsites,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Encode campsite ids for the `campsites` column.
pub fn campsites_json(campsites: &[CampsiteId]) -> Json {
    Json::Array(
        campsites
            .iter()
            .map(|c| Json::String(c.to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn model_round_trips_campsite_order() {
        let first = CampsiteId::new(Uuid::new_v4());
        let second = CampsiteId::new(Uuid::new_v4());
        let model = Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            campsites: campsites_json(&[second, first]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let record = FavoritesRecord::try_from(model.clone()).unwrap();

        assert_eq!(record.owner, model.user_id);
        assert_eq!(record.campsites, vec![second, first]);
    }

    #[test]
    fn corrupt_column_is_an_internal_error() {
        let model = Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            campsites: serde_json::json!({ "not": "an array" }),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let err = FavoritesRecord::try_from(model).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
