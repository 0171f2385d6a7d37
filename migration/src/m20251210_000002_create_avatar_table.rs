use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Avatar::Table)
                    .if_not_exists()
                    .col(pk_auto(Avatar::Id))
                    .col(string(Avatar::MediaType))
                    .col(big_integer(Avatar::FileSize))
                    .col(blob(Avatar::Data))
                    .col(string_null(Avatar::FilePath))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Avatar::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Avatar {
    Table,
    Id,
    MediaType,
    FileSize,
    Data,
    FilePath,
}
