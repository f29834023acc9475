use sea_orm::{DatabaseConnection, SqlErr};

use crate::data::rotation::RotationRepository;
use crate::error::Error;

/// How many least-recently-used candidates are considered per selection.
const CANDIDATE_WINDOW: u64 = 3;

/// Quota-aware selection across API-style providers.
pub struct RotationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RotationService<'a> {
    /// Creates a new instance of [`RotationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Picks the provider to query next.
    ///
    /// Active providers are ordered least-recently-used first, the top
    /// window is filtered to those under their monthly limit, and the
    /// survivor with the lowest usage-to-limit ratio wins. `None` means no
    /// provider has capacity and the run should abort with a no-capacity
    /// outcome rather than crash.
    pub async fn select_next(&self) -> Result<Option<String>, Error> {
        let rotation_repo = RotationRepository::new(self.db);

        let candidates = rotation_repo
            .get_active_least_recently_used(CANDIDATE_WINDOW)
            .await?;

        let best = candidates
            .into_iter()
            .filter(|state| state.requests_used < state.monthly_limit)
            .min_by(|a, b| Self::usage_ratio(a).total_cmp(&Self::usage_ratio(b)));

        Ok(best.map(|state| state.api_name))
    }

    /// Records the outcome of one fetch attempt against a provider.
    pub async fn record_usage(
        &self,
        api_name: &str,
        success: bool,
        error: Option<String>,
    ) -> Result<(), Error> {
        let rotation_repo = RotationRepository::new(self.db);

        let state = rotation_repo.get_by_name(api_name).await?.ok_or_else(|| {
            Error::InternalError(format!("No rotation state for provider {:?}", api_name))
        })?;

        let error = if success {
            None
        } else {
            Some(error.unwrap_or_else(|| "unknown error".to_string()))
        };

        rotation_repo.record_attempt(state, error).await?;

        Ok(())
    }

    /// Seeds quota rows for every known provider; already-seeded providers
    /// are left untouched.
    pub async fn ensure_providers(&self, providers: &[(&str, i32)]) -> Result<(), Error> {
        let rotation_repo = RotationRepository::new(self.db);

        for (api_name, monthly_limit) in providers {
            if rotation_repo.get_by_name(api_name).await?.is_some() {
                continue;
            }

            match rotation_repo.create(api_name, *monthly_limit).await {
                Ok(_) => {}
                // Another instance seeded the same provider concurrently.
                Err(err)
                    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {}
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    fn usage_ratio(state: &entity::api_rotation_state::Model) -> f64 {
        state.requests_used as f64 / state.monthly_limit.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::ApiStatus;
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::service::rotation::RotationService;
    use crate::util::test::setup::{insert_rotation_state, test_setup};

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmt = schema.create_table_from_entity(entity::prelude::ApiRotationState);
        db.execute(&stmt).await?;

        Ok(db)
    }

    /// Expect the provider with the lowest usage ratio to win
    #[tokio::test]
    async fn test_select_next_lowest_ratio() -> Result<(), DbErr> {
        let db = setup().await?;
        let rotation_service = RotationService::new(&db);

        insert_rotation_state(&db, "adzuna", 90, 100, ApiStatus::Active).await?;
        insert_rotation_state(&db, "remotive", 20, 100, ApiStatus::Active).await?;
        insert_rotation_state(&db, "jooble", 50, 100, ApiStatus::Active).await?;

        let selected = rotation_service.select_next().await.unwrap();

        assert_eq!(selected.as_deref(), Some("remotive"));

        Ok(())
    }

    /// Expect a provider at its monthly limit to be excluded even when least recently used
    #[tokio::test]
    async fn test_select_next_excludes_exhausted() -> Result<(), DbErr> {
        let db = setup().await?;
        let rotation_service = RotationService::new(&db);

        // Never used, so it sorts first in the window, but it has no capacity.
        insert_rotation_state(&db, "adzuna", 100, 100, ApiStatus::Active).await?;
        insert_rotation_state(&db, "remotive", 999, 1000, ApiStatus::Active).await?;

        let selected = rotation_service.select_next().await.unwrap();

        assert_eq!(selected.as_deref(), Some("remotive"));

        Ok(())
    }

    /// Expect None when no provider is eligible
    #[tokio::test]
    async fn test_select_next_no_capacity() -> Result<(), DbErr> {
        let db = setup().await?;
        let rotation_service = RotationService::new(&db);

        insert_rotation_state(&db, "adzuna", 100, 100, ApiStatus::Active).await?;
        insert_rotation_state(&db, "remotive", 0, 1000, ApiStatus::Disabled).await?;

        let selected = rotation_service.select_next().await.unwrap();

        assert!(selected.is_none());

        Ok(())
    }

    /// Expect a failed attempt to move the provider to error status
    #[tokio::test]
    async fn test_record_usage_failure_transitions_status() -> Result<(), DbErr> {
        let db = setup().await?;
        let rotation_service = RotationService::new(&db);

        insert_rotation_state(&db, "adzuna", 0, 100, ApiStatus::Active).await?;

        rotation_service
            .record_usage("adzuna", false, Some("HTTP 500".to_string()))
            .await
            .unwrap();

        let selected = rotation_service.select_next().await.unwrap();
        assert!(selected.is_none());

        Ok(())
    }

    /// Expect seeding to be idempotent across restarts
    #[tokio::test]
    async fn test_ensure_providers_idempotent() -> Result<(), DbErr> {
        let db = setup().await?;
        let rotation_service = RotationService::new(&db);

        let providers = [("adzuna", 250), ("remotive", 1000)];
        rotation_service.ensure_providers(&providers).await.unwrap();
        rotation_service.ensure_providers(&providers).await.unwrap();

        let selected = rotation_service.select_next().await.unwrap();
        assert!(selected.is_some());

        Ok(())
    }

    /// Expect Error when recording usage for an unseeded provider
    #[tokio::test]
    async fn test_record_usage_unknown_provider_error() -> Result<(), DbErr> {
        let db = setup().await?;
        let rotation_service = RotationService::new(&db);

        let result = rotation_service.record_usage("missing", true, None).await;

        assert!(result.is_err());

        Ok(())
    }
}
