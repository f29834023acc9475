use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000001_create_profile_table::Profile,
    m20260801_000002_create_company_table::Company,
};

static IDX_ALERT_PROFILE_ID: &str = "idx_alert_profile_id";
static FK_ALERT_PROFILE_ID: &str = "fk_alert_profile_id";
static FK_ALERT_COMPANY_ID: &str = "fk_alert_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alert::Table)
                    .if_not_exists()
                    .col(pk_auto(Alert::Id))
                    .col(integer(Alert::ProfileId))
                    .col(integer_null(Alert::CompanyId))
                    .col(string(Alert::AlertType))
                    .col(string(Alert::Title))
                    .col(text(Alert::Message))
                    .col(json_null(Alert::Data))
                    .col(timestamp(Alert::SentAt))
                    .col(timestamp_null(Alert::ReadAt))
                    .col(timestamp_null(Alert::ClickedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALERT_PROFILE_ID)
                    .table(Alert::Table)
                    .col(Alert::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALERT_PROFILE_ID)
                    .from_tbl(Alert::Table)
                    .from_col(Alert::ProfileId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALERT_COMPANY_ID)
                    .from_tbl(Alert::Table)
                    .from_col(Alert::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ALERT_COMPANY_ID)
                    .table(Alert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ALERT_PROFILE_ID)
                    .table(Alert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALERT_PROFILE_ID)
                    .table(Alert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Alert {
    Table,
    Id,
    ProfileId,
    CompanyId,
    AlertType,
    Title,
    Message,
    Data,
    SentAt,
    ReadAt,
    ClickedAt,
}
