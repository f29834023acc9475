use serde::Deserialize;

/// Adzuna search response envelope.
#[derive(Debug, Deserialize)]
pub struct AdzunaResponse {
    pub results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
pub struct AdzunaJob {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location: AdzunaLocation,
    pub company: AdzunaCompany,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub category: Option<AdzunaCategory>,
    #[serde(default)]
    pub contract_time: Option<String>,
    pub redirect_url: String,
    #[serde(default)]
    pub created: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdzunaLocation {
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AdzunaCompany {
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AdzunaCategory {
    pub label: String,
}
