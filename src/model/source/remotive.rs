use serde::Deserialize;

/// Remotive public API response envelope.
#[derive(Debug, Deserialize)]
pub struct RemotiveResponse {
    pub jobs: Vec<RemotiveJob>,
}

#[derive(Debug, Deserialize)]
pub struct RemotiveJob {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub candidate_required_location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
