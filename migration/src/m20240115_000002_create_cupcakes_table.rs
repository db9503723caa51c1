use sea_orm_migration::{prelude::*, schema::*};

use super::m20240115_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // No unique index on title: a soft-deleted row keeps its title in the
    // table, so uniqueness among live rows is the validation layer's job.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cupcakes::Table)
                    .col(pk_auto(Cupcakes::Id))
                    .col(string(Cupcakes::Title))
                    .col(string(Cupcakes::Author))
                    .col(string_null(Cupcakes::Publisher))
                    .col(string_null(Cupcakes::PublicationYear))
                    .col(string_null(Cupcakes::Cover))
                    .col(string_null(Cupcakes::Description))
                    .col(double_null(Cupcakes::Price))
                    .col(integer_null(Cupcakes::CreatedBy))
                    .col(integer_null(Cupcakes::UpdatedBy))
                    .col(timestamp_with_time_zone_null(Cupcakes::CreatedAt))
                    .col(timestamp_with_time_zone_null(Cupcakes::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Cupcakes::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-cupcakes-created_by")
                            .from(Cupcakes::Table, Cupcakes::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cupcakes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cupcakes {
    Table,
    Id,
    Title,
    Author,
    Publisher,
    PublicationYear,
    Cover,
    Description,
    Price,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
