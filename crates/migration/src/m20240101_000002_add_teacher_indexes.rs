//! Lookup indexes backing the optional-criteria list query.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_teacher::Teacher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_name")
                    .table(Teacher::Table)
                    .col(Teacher::LastName)
                    .col(Teacher::FirstName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_email")
                    .table(Teacher::Table)
                    .col(Teacher::Email)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_teacher_email").table(Teacher::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_teacher_name").table(Teacher::Table).to_owned())
            .await
    }
}
