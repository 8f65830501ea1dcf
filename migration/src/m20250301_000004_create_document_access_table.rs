use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000003_create_document_table::Document,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentAccess::Table)
                    .if_not_exists()
                    .col(integer(DocumentAccess::DocumentId))
                    .col(integer(DocumentAccess::UserId))
                    .col(timestamp_with_time_zone(DocumentAccess::GrantedAt))
                    .primary_key(
                        Index::create()
                            .col(DocumentAccess::DocumentId)
                            .col(DocumentAccess::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_access_document_id")
                            .from(DocumentAccess::Table, DocumentAccess::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_access_user_id")
                            .from(DocumentAccess::Table, DocumentAccess::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentAccess::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DocumentAccess {
    Table,
    DocumentId,
    UserId,
    GrantedAt,
}
