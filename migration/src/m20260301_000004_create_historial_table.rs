use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_course_group_table::CourseGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Historial::Table)
                    .if_not_exists()
                    .col(string(Historial::StudentId))
                    .col(string(Historial::GroupCode))
                    .col(string_len(Historial::Status, 20))
                    .col(timestamp_with_time_zone(Historial::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(Historial::StudentId)
                            .col(Historial::GroupCode),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_historial_group_code")
                            .from(Historial::Table, Historial::GroupCode)
                            .to(CourseGroup::Table, CourseGroup::GroupCode)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Historial::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Historial {
    Table,
    StudentId,
    GroupCode,
    Status,
    UpdatedAt,
}
