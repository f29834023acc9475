use entity::sea_orm_active_enums::AlertType;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::data::alert::{AlertRepository, NewAlert};
use crate::data::job::JobRepository;
use crate::data::preference::PreferenceRepository;
use crate::error::Error;

/// Matches newly inserted postings against saved user preferences.
pub struct MatcherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatcherService<'a> {
    /// Creates a new instance of [`MatcherService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Evaluates every (preference, new job) pair and batch-inserts one
    /// job-opportunity alert per match.
    ///
    /// Matching is boolean: all three filters (keywords, remote, salary)
    /// must pass, and no partial match is scored or ranked. All generated
    /// alerts go to the store in a single batch insert.
    pub async fn match_new_jobs(&self, job_ids: &[i32]) -> Result<usize, Error> {
        if job_ids.is_empty() {
            return Ok(0);
        }

        let preference_repo = PreferenceRepository::new(self.db);
        let job_repo = JobRepository::new(self.db);
        let alert_repo = AlertRepository::new(self.db);

        let preferences = preference_repo.find_with_criteria().await?;
        if preferences.is_empty() {
            return Ok(0);
        }

        let jobs = job_repo.find_by_ids(job_ids).await?;

        let mut alerts = Vec::new();
        for preference in &preferences {
            for job in &jobs {
                if Self::matches(preference, job) {
                    alerts.push(Self::build_alert(preference, job));
                }
            }
        }

        Ok(alert_repo.insert_many(alerts).await?)
    }

    /// Conjunctive filter over one (preference, job) pair.
    fn matches(
        preference: &entity::user_preference::Model,
        job: &entity::job_posting::Model,
    ) -> bool {
        let keywords = Self::keywords(preference);
        if !keywords.is_empty() {
            let haystack = format!("{} {}", job.title, job.description).to_lowercase();

            if !keywords
                .iter()
                .any(|keyword| haystack.contains(&keyword.to_lowercase()))
            {
                return false;
            }
        }

        if preference.remote_only && !job.is_remote {
            return false;
        }

        // Only excludes when both values are present; a job without salary
        // data stays eligible.
        if let (Some(min_salary), Some(salary_max)) = (preference.min_salary, job.salary_max) {
            if salary_max < min_salary as f64 {
                return false;
            }
        }

        true
    }

    fn keywords(preference: &entity::user_preference::Model) -> Vec<String> {
        preference
            .keywords
            .as_ref()
            .and_then(|keywords| serde_json::from_value::<Vec<String>>(keywords.clone()).ok())
            .unwrap_or_default()
    }

    fn build_alert(
        preference: &entity::user_preference::Model,
        job: &entity::job_posting::Model,
    ) -> NewAlert {
        NewAlert {
            profile_id: preference.profile_id,
            company_id: job.company_id,
            alert_type: AlertType::JobOpportunity,
            title: format!("New job opportunity: {}", job.title),
            message: format!("{} in {}", job.title, job.location),
            data: Some(json!({
                "job_id": job.id,
                "source_type": job.source_type,
                "source_url": job.source_url,
                "is_remote": job.is_remote,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, Schema};

    use crate::data::job::JobRepository;
    use crate::service::matcher::MatcherService;
    use crate::util::test::fixtures::job_draft;
    use crate::util::test::setup::{
        test_setup, test_setup_create_preference, test_setup_create_profile,
    };

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::Profile),
            schema.create_table_from_entity(entity::prelude::UserPreference),
            schema.create_table_from_entity(entity::prelude::Company),
            schema.create_table_from_entity(entity::prelude::JobPosting),
            schema.create_table_from_entity(entity::prelude::Alert),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(db)
    }

    /// Expect a keyword hit in the title to produce one alert
    #[tokio::test]
    async fn test_match_new_jobs_keyword_hit() -> Result<(), DbErr> {
        let db = setup().await?;
        let job_repo = JobRepository::new(&db);
        let matcher_service = MatcherService::new(&db);

        let profile = test_setup_create_profile(&db, "dev@example.com").await?;
        test_setup_create_preference(&db, profile.id, &["engineer"], false, None).await?;

        let job = job_repo.create(&job_draft("Platform Engineer", "Acme", "NYC"), None).await?;

        let created = matcher_service.match_new_jobs(&[job.id]).await.unwrap();

        assert_eq!(created, 1);

        let alerts = entity::prelude::Alert::find().all(&db).await?;
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].profile_id, profile.id);
        assert_eq!(alerts[0].message, "Platform Engineer in NYC");

        Ok(())
    }

    /// Expect keyword matching to be a case-insensitive substring check
    #[tokio::test]
    async fn test_match_new_jobs_keyword_case_insensitive() -> Result<(), DbErr> {
        let db = setup().await?;
        let job_repo = JobRepository::new(&db);
        let matcher_service = MatcherService::new(&db);

        let profile = test_setup_create_profile(&db, "dev@example.com").await?;
        test_setup_create_preference(&db, profile.id, &["RUST"], false, None).await?;

        let mut draft = job_draft("Backend Developer", "Acme", "NYC");
        draft.description = "We ship Rust services".to_string();
        let job = job_repo.create(&draft, None).await?;

        let created = matcher_service.match_new_jobs(&[job.id]).await.unwrap();

        assert_eq!(created, 1);

        Ok(())
    }

    /// Expect a job below the salary floor to not match
    #[tokio::test]
    async fn test_match_new_jobs_salary_below_floor() -> Result<(), DbErr> {
        let db = setup().await?;
        let job_repo = JobRepository::new(&db);
        let matcher_service = MatcherService::new(&db);

        let profile = test_setup_create_profile(&db, "dev@example.com").await?;
        test_setup_create_preference(&db, profile.id, &[], false, Some(60_000)).await?;

        let mut draft = job_draft("Engineer", "Acme", "NYC");
        draft.salary_max = Some(40_000.0);
        let job = job_repo.create(&draft, None).await?;

        let created = matcher_service.match_new_jobs(&[job.id]).await.unwrap();

        assert_eq!(created, 0);

        Ok(())
    }

    /// Expect a job without salary data to stay eligible under a salary floor
    #[tokio::test]
    async fn test_match_new_jobs_missing_salary_eligible() -> Result<(), DbErr> {
        let db = setup().await?;
        let job_repo = JobRepository::new(&db);
        let matcher_service = MatcherService::new(&db);

        let profile = test_setup_create_profile(&db, "dev@example.com").await?;
        test_setup_create_preference(&db, profile.id, &[], false, Some(60_000)).await?;

        let job = job_repo.create(&job_draft("Engineer", "Acme", "NYC"), None).await?;

        let created = matcher_service.match_new_jobs(&[job.id]).await.unwrap();

        assert_eq!(created, 1);

        Ok(())
    }

    /// Expect remote-only preferences to reject onsite jobs
    #[tokio::test]
    async fn test_match_new_jobs_remote_only() -> Result<(), DbErr> {
        let db = setup().await?;
        let job_repo = JobRepository::new(&db);
        let matcher_service = MatcherService::new(&db);

        let profile = test_setup_create_profile(&db, "dev@example.com").await?;
        test_setup_create_preference(&db, profile.id, &[], true, None).await?;

        let onsite = job_repo.create(&job_draft("Engineer", "Acme", "NYC"), None).await?;

        let mut remote_draft = job_draft("Engineer", "Globex", "Remote");
        remote_draft.is_remote = true;
        let remote = job_repo.create(&remote_draft, None).await?;

        let created = matcher_service
            .match_new_jobs(&[onsite.id, remote.id])
            .await
            .unwrap();

        assert_eq!(created, 1);

        let alerts = entity::prelude::Alert::find().all(&db).await?;
        assert_eq!(alerts[0].message, "Engineer in Remote");

        Ok(())
    }

    /// Expect no store writes when there are no new jobs
    #[tokio::test]
    async fn test_match_new_jobs_empty_input() -> Result<(), DbErr> {
        let db = setup().await?;
        let matcher_service = MatcherService::new(&db);

        let created = matcher_service.match_new_jobs(&[]).await.unwrap();

        assert_eq!(created, 0);

        Ok(())
    }
}
