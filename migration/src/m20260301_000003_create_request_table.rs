use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Request::Table)
                    .if_not_exists()
                    .col(string(Request::Id).primary_key())
                    .col(string(Request::StudentId))
                    .col(string_len(Request::RequestType, 20))
                    .col(string_null(Request::OriginGroup))
                    .col(string_null(Request::DestinationGroup))
                    .col(string_len(Request::Status, 20))
                    .col(string_null(Request::FacultyId))
                    .col(text(Request::Description))
                    .col(timestamp_with_time_zone(Request::CreatedAt))
                    .col(timestamp_with_time_zone(Request::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_request_student_id")
                    .table(Request::Table)
                    .col(Request::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_request_status")
                    .table(Request::Table)
                    .col(Request::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Request {
    Table,
    Id,
    StudentId,
    RequestType,
    OriginGroup,
    DestinationGroup,
    Status,
    FacultyId,
    Description,
    CreatedAt,
    UpdatedAt,
}
