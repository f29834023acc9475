use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000002_create_company_table::Company;

static IDX_JOB_POSTING_COMPANY_ID: &str = "idx_job_posting_company_id";
static IDX_JOB_POSTING_EXTERNAL_ID: &str = "idx_job_posting_external_id";
static FK_JOB_POSTING_COMPANY_ID: &str = "fk_job_posting_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobPosting::Table)
                    .if_not_exists()
                    .col(pk_auto(JobPosting::Id))
                    .col(integer_null(JobPosting::CompanyId))
                    .col(string(JobPosting::Title))
                    .col(text(JobPosting::Description))
                    .col(string_null(JobPosting::Department))
                    .col(string_null(JobPosting::SeniorityLevel))
                    .col(string(JobPosting::Location))
                    .col(string_null(JobPosting::Country))
                    .col(boolean(JobPosting::IsRemote))
                    .col(string_null(JobPosting::RemoteType))
                    .col(double_null(JobPosting::SalaryMin))
                    .col(double_null(JobPosting::SalaryMax))
                    .col(string_null(JobPosting::SalaryCurrency))
                    .col(string_null(JobPosting::JobType))
                    .col(string(JobPosting::SourceType))
                    .col(string(JobPosting::SourceUrl))
                    .col(string_null(JobPosting::ExternalId))
                    .col(timestamp_null(JobPosting::PostedDate))
                    .col(boolean(JobPosting::IsActive))
                    .col(json_null(JobPosting::TechStack))
                    .col(string_uniq(JobPosting::DedupHash))
                    .col(timestamp(JobPosting::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_POSTING_COMPANY_ID)
                    .table(JobPosting::Table)
                    .col(JobPosting::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_POSTING_EXTERNAL_ID)
                    .table(JobPosting::Table)
                    .col(JobPosting::ExternalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_POSTING_COMPANY_ID)
                    .from_tbl(JobPosting::Table)
                    .from_col(JobPosting::CompanyId)
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
                    .name(FK_JOB_POSTING_COMPANY_ID)
                    .table(JobPosting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_POSTING_EXTERNAL_ID)
                    .table(JobPosting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_POSTING_COMPANY_ID)
                    .table(JobPosting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobPosting::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum JobPosting {
    Table,
    Id,
    CompanyId,
    Title,
    Description,
    Department,
    SeniorityLevel,
    Location,
    Country,
    IsRemote,
    RemoteType,
    SalaryMin,
    SalaryMax,
    SalaryCurrency,
    JobType,
    SourceType,
    SourceUrl,
    ExternalId,
    PostedDate,
    IsActive,
    TechStack,
    DedupHash,
    CreatedAt,
}
