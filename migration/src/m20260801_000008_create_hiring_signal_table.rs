use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000002_create_company_table::Company;

static IDX_HIRING_SIGNAL_COMPANY_TITLE: &str = "idx_hiring_signal_company_title";
static FK_HIRING_SIGNAL_COMPANY_ID: &str = "fk_hiring_signal_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HiringSignal::Table)
                    .if_not_exists()
                    .col(pk_auto(HiringSignal::Id))
                    .col(integer(HiringSignal::CompanyId))
                    .col(string(HiringSignal::SignalType))
                    .col(string(HiringSignal::Title))
                    .col(text_null(HiringSignal::Description))
                    .col(double(HiringSignal::ConfidenceScore))
                    .col(string_null(HiringSignal::SourceUrl))
                    .col(timestamp(HiringSignal::DetectedAt))
                    .col(json_null(HiringSignal::Metadata))
                    .to_owned(),
            )
            .await?;

        // An exact title repeat for the same company is the same signal.
        manager
            .create_index(
                Index::create()
                    .name(IDX_HIRING_SIGNAL_COMPANY_TITLE)
                    .table(HiringSignal::Table)
                    .col(HiringSignal::CompanyId)
                    .col(HiringSignal::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HIRING_SIGNAL_COMPANY_ID)
                    .from_tbl(HiringSignal::Table)
                    .from_col(HiringSignal::CompanyId)
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
                    .name(FK_HIRING_SIGNAL_COMPANY_ID)
                    .table(HiringSignal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HIRING_SIGNAL_COMPANY_TITLE)
                    .table(HiringSignal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HiringSignal::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HiringSignal {
    Table,
    Id,
    CompanyId,
    SignalType,
    Title,
    Description,
    ConfidenceScore,
    SourceUrl,
    DetectedAt,
    Metadata,
}
