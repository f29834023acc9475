use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    /// Creates a new instance of [`CompanyRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a company by name, ignoring case.
    ///
    /// "Acme", "ACME", and "acme" all resolve to the same row; the
    /// `lower(name)` unique index keeps the store from ever holding two.
    pub async fn find_by_name_case_insensitive(
        &self,
        name: &str,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::company::Column::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .one(self.db)
            .await
    }

    /// Creates a minimal company row for a name seen for the first time.
    ///
    /// Industry defaults to a generic category and the description is
    /// synthesized from the name; user-facing enrichment happens elsewhere.
    pub async fn create(&self, name: &str) -> Result<entity::company::Model, DbErr> {
        let name = name.trim();
        let now = Utc::now().naive_utc();

        let company = entity::company::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            industry: ActiveValue::Set(Some("Technology".to_string())),
            description: ActiveValue::Set(Some(format!("Company profile for {}", name))),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        company.insert(self.db).await
    }
}
