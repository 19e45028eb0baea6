//! Create `teacher` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(uuid(Teacher::Id).primary_key())
                    .col(string_len(Teacher::FirstName, 100).not_null())
                    .col(string_len_null(Teacher::MiddleInitial, 1))
                    .col(string_len(Teacher::LastName, 100).not_null())
                    .col(string_len_null(Teacher::Email, 255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Teacher::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Teacher {
    Table,
    Id,
    FirstName,
    MiddleInitial,
    LastName,
    Email,
}
