use async_trait::async_trait;
use chrono::DateTime;

use crate::error::fetch::FetchError;
use crate::model::job::JobDraft;
use crate::model::source::adzuna::{AdzunaJob, AdzunaResponse};
use crate::service::source::{JobSource, SourceConfig, ADZUNA};
use crate::util::normalize;

const RESULTS_PER_PAGE: &str = "50";

/// Fetcher for the Adzuna job-search API.
pub struct AdzunaSource {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl AdzunaSource {
    /// Creates a new instance of [`AdzunaSource`]
    pub fn new(http: reqwest::Client, config: &SourceConfig) -> Self {
        Self {
            http,
            base_url: config.adzuna_base_url.clone(),
            app_id: config.adzuna_app_id.clone(),
            app_key: config.adzuna_app_key.clone(),
        }
    }

    fn map_job(job: AdzunaJob) -> JobDraft {
        let location = job.location.display_name;
        let description = job.description.unwrap_or_default();
        let company_name = job.company.display_name;

        let classification = normalize::classify_location(&location, &description);
        let dedup_hash = normalize::fingerprint(&job.title, &company_name, &location);

        let has_salary = job.salary_min.is_some() || job.salary_max.is_some();
        let posted_date = job
            .created
            .as_deref()
            .and_then(|created| DateTime::parse_from_rfc3339(created).ok())
            .map(|created| created.naive_utc());

        JobDraft {
            country: normalize::extract_country(&location).map(str::to_string),
            company_name,
            title: job.title,
            description,
            department: job.category.map(|category| category.label),
            seniority_level: None,
            location,
            is_remote: classification.is_remote,
            remote_type: classification.remote_type,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            salary_currency: has_salary.then(|| "USD".to_string()),
            job_type: job.contract_time,
            source_type: ADZUNA,
            source_url: job.redirect_url,
            external_id: Some(job.id),
            posted_date,
            tech_stack: None,
            dedup_hash,
        }
    }
}

#[async_trait]
impl JobSource for AdzunaSource {
    fn name(&self) -> &'static str {
        ADZUNA
    }

    async fn fetch(&self) -> Result<Vec<JobDraft>, FetchError> {
        let url = format!("{}/v1/api/jobs/us/search/1", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("results_per_page", RESULTS_PER_PAGE),
                ("content-type", "application/json"),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Request {
                provider: ADZUNA,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                provider: ADZUNA,
                status,
            });
        }

        let payload: AdzunaResponse =
            response.json().await.map_err(|source| FetchError::Parse {
                provider: ADZUNA,
                reason: source.to_string(),
            })?;

        Ok(payload.results.into_iter().map(Self::map_job).collect())
    }
}
