use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::fetch::FetchError;
use crate::model::job::JobDraft;
use crate::model::source::remotive::{RemotiveJob, RemotiveResponse};
use crate::service::source::{JobSource, SourceConfig, REMOTIVE};
use crate::util::normalize;

const RESULT_LIMIT: &str = "50";

/// Fetcher for the Remotive public remote-jobs API.
pub struct RemotiveSource {
    http: reqwest::Client,
    base_url: String,
}

impl RemotiveSource {
    /// Creates a new instance of [`RemotiveSource`]
    pub fn new(http: reqwest::Client, config: &SourceConfig) -> Self {
        Self {
            http,
            base_url: config.remotive_base_url.clone(),
        }
    }

    fn map_job(job: RemotiveJob) -> JobDraft {
        let location = job
            .candidate_required_location
            .unwrap_or_else(|| "Remote".to_string());
        let description = job.description.unwrap_or_default();

        let classification = normalize::classify_location(&location, &description);
        let dedup_hash = normalize::fingerprint(&job.title, &job.company_name, &location);

        // Remotive timestamps carry no offset, e.g. "2026-07-01T12:34:56".
        let posted_date = job
            .publication_date
            .as_deref()
            .and_then(|date| NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").ok());

        let tech_stack = (!job.tags.is_empty()).then_some(job.tags);

        JobDraft {
            country: normalize::extract_country(&location).map(str::to_string),
            company_name: job.company_name,
            title: job.title,
            description,
            department: job.category,
            seniority_level: None,
            location,
            is_remote: classification.is_remote,
            remote_type: classification.remote_type,
            // Remotive reports salary as freeform text, which never feeds
            // the numeric salary filter.
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            job_type: job.job_type,
            source_type: REMOTIVE,
            source_url: job.url,
            external_id: Some(job.id.to_string()),
            posted_date,
            tech_stack,
            dedup_hash,
        }
    }
}

#[async_trait]
impl JobSource for RemotiveSource {
    fn name(&self) -> &'static str {
        REMOTIVE
    }

    async fn fetch(&self) -> Result<Vec<JobDraft>, FetchError> {
        let url = format!("{}/api/remote-jobs", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("limit", RESULT_LIMIT)])
            .send()
            .await
            .map_err(|source| FetchError::Request {
                provider: REMOTIVE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                provider: REMOTIVE,
                status,
            });
        }

        let payload: RemotiveResponse =
            response.json().await.map_err(|source| FetchError::Parse {
                provider: REMOTIVE,
                reason: source.to_string(),
            })?;

        Ok(payload.jobs.into_iter().map(Self::map_job).collect())
    }
}
