use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::RemoteType;

/// Canonical in-memory job record produced by a source fetcher.
///
/// Carries the provider's company display name so the dedup engine can
/// resolve (or lazily create) the company row at insertion time. Fetchers
/// build drafts; only the dedup engine writes them to the store.
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub company_name: String,
    pub title: String,
    pub description: String,
    pub department: Option<String>,
    pub seniority_level: Option<String>,
    pub location: String,
    pub country: Option<String>,
    pub is_remote: bool,
    pub remote_type: Option<RemoteType>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub job_type: Option<String>,
    pub source_type: &'static str,
    pub source_url: String,
    pub external_id: Option<String>,
    pub posted_date: Option<NaiveDateTime>,
    pub tech_stack: Option<Vec<String>>,
    pub dedup_hash: String,
}

/// Result of a deduplicating batch insert.
#[derive(Debug, Default)]
pub struct InsertOutcome {
    pub inserted: usize,
    pub skipped: usize,
    pub inserted_ids: Vec<i32>,
}
