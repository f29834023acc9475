use entity::sea_orm_active_enums::AlertType;
use sea_orm::{ActiveEnum, DatabaseConnection, SqlErr};
use serde_json::json;

use crate::data::alert::{AlertRepository, NewAlert};
use crate::data::signal::SignalRepository;
use crate::data::track::TrackRepository;
use crate::error::Error;
use crate::model::report::SignalStats;
use crate::model::signal::SignalEvent;
use crate::service::company::CompanyService;

/// Ingests company-level hiring-signal events and fans alerts out to
/// tracking users.
pub struct SignalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignalService<'a> {
    /// Creates a new instance of [`SignalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Processes a batch of signal events.
    ///
    /// Each event resolves (or lazily creates) its company, is skipped when
    /// the same (company, title) pair already exists, and otherwise persists
    /// and fans out one alert per tracking user before the next event is
    /// touched. An error on one event is recorded in the stats and never
    /// aborts its siblings.
    pub async fn ingest_signals(&self, events: &[SignalEvent]) -> SignalStats {
        let mut stats = SignalStats::default();

        for event in events {
            match self.ingest_signal(event).await {
                Ok(Some(alerts_created)) => {
                    stats.processed += 1;
                    stats.alerts_created += alerts_created;
                }
                Ok(None) => stats.skipped += 1,
                Err(err) => {
                    tracing::error!(
                        "Failed to process signal {:?} for {}: {:?}",
                        event.title,
                        event.company_name,
                        err
                    );
                    stats.errors.push(format!("{}: {}", event.company_name, err));
                }
            }
        }

        stats
    }

    /// Ingests one event; `None` means the signal was a duplicate.
    async fn ingest_signal(&self, event: &SignalEvent) -> Result<Option<usize>, Error> {
        let signal_repo = SignalRepository::new(self.db);
        let company_service = CompanyService::new(self.db);

        let company = company_service
            .get_or_create_company(&event.company_name)
            .await?;

        let existing = signal_repo
            .find_by_company_and_title(company.id, &event.title)
            .await?;

        if existing.is_some() {
            return Ok(None);
        }

        let signal = match signal_repo.create(company.id, event).await {
            Ok(signal) => signal,
            // The (company, title) unique index is the dedup backstop.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let alerts_created = self.fan_out(company.id, &signal).await?;

        Ok(Some(alerts_created))
    }

    /// Creates one hiring-signal alert per user tracking the company.
    async fn fan_out(
        &self,
        company_id: i32,
        signal: &entity::hiring_signal::Model,
    ) -> Result<usize, Error> {
        let track_repo = TrackRepository::new(self.db);
        let alert_repo = AlertRepository::new(self.db);

        let profile_ids = track_repo
            .get_profile_ids_tracking_company(company_id)
            .await?;

        if profile_ids.is_empty() {
            return Ok(0);
        }

        let alerts = profile_ids
            .into_iter()
            .map(|profile_id| NewAlert {
                profile_id,
                company_id: Some(company_id),
                alert_type: AlertType::HiringSignal,
                title: signal.title.clone(),
                message: signal.description.clone().unwrap_or_default(),
                data: Some(json!({
                    "signal_type": signal.signal_type.to_value(),
                    "confidence_score": signal.confidence_score,
                    "source_url": signal.source_url,
                    "metadata": signal.metadata,
                })),
            })
            .collect();

        Ok(alert_repo.insert_many(alerts).await?)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, Schema};

    use crate::service::signal::SignalService;
    use crate::util::test::fixtures::signal_event;
    use crate::util::test::setup::{
        test_setup, test_setup_create_profile, test_setup_track_company,
    };

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::Profile),
            schema.create_table_from_entity(entity::prelude::Company),
            schema.create_table_from_entity(entity::prelude::UserCompanyTrack),
            schema.create_table_from_entity(entity::prelude::HiringSignal),
            schema.create_table_from_entity(entity::prelude::Alert),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(db)
    }

    /// Expect a new signal to create the company and fan out to trackers
    #[tokio::test]
    async fn test_ingest_signals_fans_out_to_trackers() -> Result<(), DbErr> {
        let db = setup().await?;
        let signal_service = SignalService::new(&db);

        // Track the company before its first signal arrives.
        let company = crate::data::company::CompanyRepository::new(&db)
            .create("Acme")
            .await?;
        let tracker = test_setup_create_profile(&db, "tracker@example.com").await?;
        let bystander = test_setup_create_profile(&db, "bystander@example.com").await?;
        test_setup_track_company(&db, tracker.id, company.id).await?;

        let stats = signal_service
            .ingest_signals(&[signal_event("Acme", "Acme raises Series A")])
            .await;

        assert_eq!(stats.processed, 1);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.alerts_created, 1);
        assert!(stats.errors.is_empty());

        let alerts = entity::prelude::Alert::find().all(&db).await?;
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].profile_id, tracker.id);
        assert_ne!(alerts[0].profile_id, bystander.id);
        assert_eq!(alerts[0].company_id, Some(company.id));

        Ok(())
    }

    /// Expect an exact (company, title) repeat to be skipped
    #[tokio::test]
    async fn test_ingest_signals_skips_duplicate() -> Result<(), DbErr> {
        let db = setup().await?;
        let signal_service = SignalService::new(&db);

        let event = signal_event("Acme", "Acme raises Series A");

        let first = signal_service.ingest_signals(&[event.clone()]).await;
        let second = signal_service.ingest_signals(&[event]).await;

        assert_eq!(first.processed, 1);
        assert_eq!(second.processed, 0);
        assert_eq!(second.skipped, 1);

        let signals = entity::prelude::HiringSignal::find().all(&db).await?;
        assert_eq!(signals.len(), 1);

        Ok(())
    }

    /// Expect case variations of the company name to not create a second row
    #[tokio::test]
    async fn test_ingest_signals_company_case_insensitive() -> Result<(), DbErr> {
        let db = setup().await?;
        let signal_service = SignalService::new(&db);

        signal_service
            .ingest_signals(&[signal_event("Acme", "Acme raises Series A")])
            .await;
        signal_service
            .ingest_signals(&[signal_event("ACME", "Acme opens Berlin office")])
            .await;

        let companies = entity::prelude::Company::find().all(&db).await?;
        assert_eq!(companies.len(), 1);

        let signals = entity::prelude::HiringSignal::find().all(&db).await?;
        assert_eq!(signals.len(), 2);

        Ok(())
    }

    /// Expect a signal with no trackers to persist without alerts
    #[tokio::test]
    async fn test_ingest_signals_no_trackers() -> Result<(), DbErr> {
        let db = setup().await?;
        let signal_service = SignalService::new(&db);

        let stats = signal_service
            .ingest_signals(&[signal_event("Acme", "Acme raises Series A")])
            .await;

        assert_eq!(stats.processed, 1);
        assert_eq!(stats.alerts_created, 0);

        Ok(())
    }

    /// Expect per-event errors to be isolated from sibling events
    #[tokio::test]
    async fn test_ingest_signals_errors_isolated() {
        // No tables at all: every event fails, but the batch completes.
        let test = test_setup().await;
        let signal_service = SignalService::new(&test.db);

        let stats = signal_service
            .ingest_signals(&[
                signal_event("Acme", "Acme raises Series A"),
                signal_event("Globex", "Globex expands engineering"),
            ])
            .await;

        assert_eq!(stats.processed, 0);
        assert_eq!(stats.errors.len(), 2);
    }
}
