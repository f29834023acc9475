use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_create_profile_table::Profile;

static FK_USER_PREFERENCE_PROFILE_ID: &str = "fk_user_preference_profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPreference::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPreference::Id))
                    .col(integer_uniq(UserPreference::ProfileId))
                    .col(json_null(UserPreference::Keywords))
                    .col(boolean(UserPreference::RemoteOnly))
                    .col(integer_null(UserPreference::MinSalary))
                    .col(timestamp(UserPreference::CreatedAt))
                    .col(timestamp(UserPreference::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_PREFERENCE_PROFILE_ID)
                    .from_tbl(UserPreference::Table)
                    .from_col(UserPreference::ProfileId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_PREFERENCE_PROFILE_ID)
                    .table(UserPreference::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserPreference::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserPreference {
    Table,
    Id,
    ProfileId,
    Keywords,
    RemoteOnly,
    MinSalary,
    CreatedAt,
    UpdatedAt,
}
