use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::signal::SignalEvent;

/// Confidence assigned to events whose detector reported none.
const DEFAULT_CONFIDENCE: f64 = 5.0;

pub struct SignalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignalRepository<'a> {
    /// Creates a new instance of [`SignalRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an existing signal with the exact same title for a company.
    ///
    /// An exact title repeat for the same company is treated as the same
    /// signal reappearing, not a new one.
    pub async fn find_by_company_and_title(
        &self,
        company_id: i32,
        title: &str,
    ) -> Result<Option<entity::hiring_signal::Model>, DbErr> {
        entity::prelude::HiringSignal::find()
            .filter(entity::hiring_signal::Column::CompanyId.eq(company_id))
            .filter(entity::hiring_signal::Column::Title.eq(title))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        company_id: i32,
        event: &SignalEvent,
    ) -> Result<entity::hiring_signal::Model, DbErr> {
        let detected_at = event
            .detected_at
            .unwrap_or_else(|| Utc::now().naive_utc());

        let signal = entity::hiring_signal::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            signal_type: ActiveValue::Set(event.signal_type.clone()),
            title: ActiveValue::Set(event.title.clone()),
            description: ActiveValue::Set(Some(event.description.clone())),
            confidence_score: ActiveValue::Set(event.confidence_score.unwrap_or(DEFAULT_CONFIDENCE)),
            source_url: ActiveValue::Set(event.source_url.clone()),
            detected_at: ActiveValue::Set(detected_at),
            metadata: ActiveValue::Set(event.metadata.clone()),
            ..Default::default()
        };

        signal.insert(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::data::company::CompanyRepository;
    use crate::data::signal::SignalRepository;
    use crate::util::test::fixtures::signal_event;
    use crate::util::test::setup::test_setup;

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::Company),
            schema.create_table_from_entity(entity::prelude::HiringSignal),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(db)
    }

    /// Expect an exact (company, title) repeat to be found
    #[tokio::test]
    async fn test_find_by_company_and_title_success() -> Result<(), DbErr> {
        let db = setup().await?;
        let signal_repo = SignalRepository::new(&db);
        let company = CompanyRepository::new(&db).create("Acme").await?;

        let event = signal_event("Acme", "Acme raises Series A");
        let created = signal_repo.create(company.id, &event).await?;

        let found = signal_repo
            .find_by_company_and_title(company.id, "Acme raises Series A")
            .await?;

        assert_eq!(found.map(|signal| signal.id), Some(created.id));

        Ok(())
    }

    /// Expect the same title under a different company to not match
    #[tokio::test]
    async fn test_find_by_company_and_title_other_company() -> Result<(), DbErr> {
        let db = setup().await?;
        let signal_repo = SignalRepository::new(&db);
        let company_repo = CompanyRepository::new(&db);

        let acme = company_repo.create("Acme").await?;
        let globex = company_repo.create("Globex").await?;

        let event = signal_event("Acme", "Acme raises Series A");
        signal_repo.create(acme.id, &event).await?;

        let found = signal_repo
            .find_by_company_and_title(globex.id, "Acme raises Series A")
            .await?;

        assert!(found.is_none());

        Ok(())
    }

    /// Expect a missing confidence score to default
    #[tokio::test]
    async fn test_create_defaults_confidence() -> Result<(), DbErr> {
        let db = setup().await?;
        let signal_repo = SignalRepository::new(&db);
        let company = CompanyRepository::new(&db).create("Acme").await?;

        let mut event = signal_event("Acme", "Acme opens Berlin office");
        event.confidence_score = None;

        let created = signal_repo.create(company.id, &event).await?;

        assert_eq!(created.confidence_score, 5.0);

        Ok(())
    }
}
