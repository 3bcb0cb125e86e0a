//! Migration: Users and campsites tables read by the favorites service.
//!
//! Both tables belong to other services and may already exist in a shared
//! database, so creation is conditional and `down` leaves them in place.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campsites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Campsites::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Campsites::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Campsites::Description).text().not_null())
                    .col(ColumnDef::new(Campsites::Image).string().not_null())
                    .col(ColumnDef::new(Campsites::Elevation).integer().not_null())
                    .col(ColumnDef::new(Campsites::Cost).integer().not_null())
                    .col(
                        ColumnDef::new(Campsites::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Campsites::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Campsites::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
}

#[derive(Iden)]
enum Campsites {
    Table,
    Id,
    Name,
    Description,
    Image,
    Elevation,
    Cost,
    Featured,
    CreatedAt,
    UpdatedAt,
}
