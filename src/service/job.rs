use sea_orm::{DatabaseConnection, SqlErr};

use crate::data::job::JobRepository;
use crate::error::Error;
use crate::model::job::{InsertOutcome, JobDraft};
use crate::service::company::CompanyService;

/// Deduplication and insertion engine for fetched job drafts.
pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new instance of [`JobService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists drafts that aren't already in the store.
    ///
    /// A draft matching an existing posting by provider-native id or by
    /// content fingerprint is counted as skipped and never overwrites the
    /// existing record. A store failure on one draft is logged and counted
    /// as skipped without affecting its siblings.
    pub async fn insert_jobs(&self, drafts: Vec<JobDraft>) -> Result<InsertOutcome, Error> {
        let mut outcome = InsertOutcome::default();

        for draft in drafts {
            match self.insert_job(&draft).await {
                Ok(Some(id)) => {
                    outcome.inserted += 1;
                    outcome.inserted_ids.push(id);
                }
                Ok(None) => outcome.skipped += 1,
                Err(err) => {
                    tracing::error!(
                        "Failed to persist job {:?} from {}: {:?}",
                        draft.title,
                        draft.source_type,
                        err
                    );
                    outcome.skipped += 1;
                }
            }
        }

        Ok(outcome)
    }

    /// Inserts one draft, returning its assigned id or `None` on a dedup skip.
    async fn insert_job(&self, draft: &JobDraft) -> Result<Option<i32>, Error> {
        let job_repo = JobRepository::new(self.db);
        let company_service = CompanyService::new(self.db);

        let company = company_service
            .get_or_create_company(&draft.company_name)
            .await?;

        let existing = job_repo
            .find_by_external_id_or_hash(draft.external_id.as_deref(), &draft.dedup_hash)
            .await?;

        if existing.is_some() {
            return Ok(None);
        }

        match job_repo.create(draft, Some(company.id)).await {
            Ok(job) => Ok(Some(job.id)),
            // The unique fingerprint index is the dedup backstop when a
            // concurrent run inserted between the pre-check and here.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
