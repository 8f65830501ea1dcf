use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Memo::Table)
                    .if_not_exists()
                    .col(pk_auto(Memo::Id))
                    .col(string(Memo::Title))
                    .col(text(Memo::Content))
                    .col(timestamp_with_time_zone(Memo::CreatedAt))
                    .col(timestamp_with_time_zone(Memo::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Memo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Memo {
    Table,
    Id,
    Title,
    Content,
    CreatedAt,
    UpdatedAt,
}
