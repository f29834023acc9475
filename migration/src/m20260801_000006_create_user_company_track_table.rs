use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000001_create_profile_table::Profile,
    m20260801_000002_create_company_table::Company,
};

static IDX_USER_COMPANY_TRACK_UNIQUE: &str = "idx_user_company_track_profile_company";
static IDX_USER_COMPANY_TRACK_COMPANY_ID: &str = "idx_user_company_track_company_id";
static FK_USER_COMPANY_TRACK_PROFILE_ID: &str = "fk_user_company_track_profile_id";
static FK_USER_COMPANY_TRACK_COMPANY_ID: &str = "fk_user_company_track_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCompanyTrack::Table)
                    .if_not_exists()
                    .col(pk_auto(UserCompanyTrack::Id))
                    .col(integer(UserCompanyTrack::ProfileId))
                    .col(integer(UserCompanyTrack::CompanyId))
                    .col(timestamp(UserCompanyTrack::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_COMPANY_TRACK_UNIQUE)
                    .table(UserCompanyTrack::Table)
                    .col(UserCompanyTrack::ProfileId)
                    .col(UserCompanyTrack::CompanyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_COMPANY_TRACK_COMPANY_ID)
                    .table(UserCompanyTrack::Table)
                    .col(UserCompanyTrack::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_COMPANY_TRACK_PROFILE_ID)
                    .from_tbl(UserCompanyTrack::Table)
                    .from_col(UserCompanyTrack::ProfileId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_COMPANY_TRACK_COMPANY_ID)
                    .from_tbl(UserCompanyTrack::Table)
                    .from_col(UserCompanyTrack::CompanyId)
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
                    .name(FK_USER_COMPANY_TRACK_COMPANY_ID)
                    .table(UserCompanyTrack::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_COMPANY_TRACK_PROFILE_ID)
                    .table(UserCompanyTrack::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_COMPANY_TRACK_COMPANY_ID)
                    .table(UserCompanyTrack::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_COMPANY_TRACK_UNIQUE)
                    .table(UserCompanyTrack::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserCompanyTrack::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserCompanyTrack {
    Table,
    Id,
    ProfileId,
    CompanyId,
    CreatedAt,
}
