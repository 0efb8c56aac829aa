use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseGroup::Table)
                    .if_not_exists()
                    .col(string(CourseGroup::GroupCode).primary_key())
                    .col(string(CourseGroup::ProfessorId))
                    .col(boolean(CourseGroup::IsLab).default(false))
                    .col(integer(CourseGroup::GroupNum))
                    .col(integer(CourseGroup::MaxCapacity))
                    .col(integer(CourseGroup::Enrolled).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseGroup {
    Table,
    GroupCode,
    ProfessorId,
    IsLab,
    GroupNum,
    MaxCapacity,
    Enrolled,
}
