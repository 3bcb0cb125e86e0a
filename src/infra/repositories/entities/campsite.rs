//! Campsite database entity for SeaORM.
//!
//! The catalogue owns this table; favorites only read it.

use sea_orm::entity::prelude::*;

use crate::domain::{Campsite, CampsiteId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campsites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub image: String,
    pub elevation: i32,
    pub cost: i32,
    pub featured: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Campsite {
    fn from(model: Model) -> Self {
        Self {
            id: CampsiteId::new(model.id),
            name: model.name,
            description: model.description,
            image: model.image,
            elevation: model.elevation,
            cost: model.cost,
            featured: model.featured,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
