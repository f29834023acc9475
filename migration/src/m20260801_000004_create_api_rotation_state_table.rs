use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApiRotationState::Table)
                    .if_not_exists()
                    .col(pk_auto(ApiRotationState::Id))
                    .col(string_uniq(ApiRotationState::ApiName))
                    .col(timestamp_null(ApiRotationState::LastUsedAt))
                    .col(integer(ApiRotationState::RequestsUsed))
                    .col(integer(ApiRotationState::MonthlyLimit))
                    .col(string(ApiRotationState::Status))
                    .col(integer(ApiRotationState::ErrorCount))
                    .col(text_null(ApiRotationState::LastError))
                    .col(timestamp(ApiRotationState::CreatedAt))
                    .col(timestamp(ApiRotationState::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApiRotationState::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ApiRotationState {
    Table,
    Id,
    ApiName,
    LastUsedAt,
    RequestsUsed,
    MonthlyLimit,
    Status,
    ErrorCount,
    LastError,
    CreatedAt,
    UpdatedAt,
}
