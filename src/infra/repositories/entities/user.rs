//! User database entity for SeaORM.
//!
//! Accounts are written by the identity service; only the public
//! columns needed to resolve a favorites owner are mapped here.

use sea_orm::entity::prelude::*;

use crate::domain::UserProfile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserProfile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: Some(model.email),
            name: Some(model.name),
        }
    }
}
