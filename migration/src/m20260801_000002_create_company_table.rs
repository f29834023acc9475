use sea_orm_migration::{prelude::*, schema::*};

static IDX_COMPANY_NAME_LOWER: &str = "idx_company_name_lower";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string_uniq(Company::Name))
                    .col(string_null(Company::Website))
                    .col(string_null(Company::Industry))
                    .col(string_null(Company::SizeCategory))
                    .col(string_null(Company::LogoUrl))
                    .col(string_null(Company::CareersPageUrl))
                    .col(string_null(Company::LinkedinUrl))
                    .col(integer_null(Company::EmployeeCount))
                    .col(text_null(Company::Description))
                    .col(timestamp(Company::CreatedAt))
                    .col(timestamp(Company::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Case-insensitive uniqueness backstop for the lookup-or-create path.
        // Expression indexes aren't expressible through IndexCreateStatement,
        // so this goes through raw SQL (valid for both Postgres and SQLite).
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX {} ON company (LOWER(name))",
                IDX_COMPANY_NAME_LOWER
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPANY_NAME_LOWER)
                    .table(Company::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    Id,
    Name,
    Website,
    Industry,
    SizeCategory,
    LogoUrl,
    CareersPageUrl,
    LinkedinUrl,
    EmployeeCount,
    Description,
    CreatedAt,
    UpdatedAt,
}
