use sea_orm::{DatabaseConnection, SqlErr};

use crate::data::company::CompanyRepository;
use crate::error::Error;

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    /// Creates a new instance of [`CompanyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a company by display name, creating a minimal row the first
    /// time the name is seen.
    ///
    /// The lookup ignores case, so "Acme", "ACME", and "acme" share one row.
    /// When a concurrent ingestion run creates the row between the lookup
    /// and the insert, the case-insensitive unique index rejects the insert
    /// and the winner is re-read instead.
    pub async fn get_or_create_company(
        &self,
        name: &str,
    ) -> Result<entity::company::Model, Error> {
        let company_repo = CompanyRepository::new(self.db);

        if let Some(existing) = company_repo.find_by_name_case_insensitive(name).await? {
            return Ok(existing);
        }

        match company_repo.create(name).await {
            Ok(created) => Ok(created),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                company_repo
                    .find_by_name_case_insensitive(name)
                    .await?
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "Company {:?} missing after unique-constraint conflict",
                            name
                        ))
                    })
            }
            Err(err) => Err(err.into()),
        }
    }
}
