use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::SignalType;
use serde_json::json;

/// A company-level hiring signal event awaiting ingestion.
///
/// Events reference companies by display name; the ingestion path resolves
/// (or lazily creates) the company row, exactly like job insertion does.
#[derive(Debug, Clone)]
pub struct SignalEvent {
    pub company_name: String,
    pub signal_type: SignalType,
    pub title: String,
    pub description: String,
    pub confidence_score: Option<f64>,
    pub source_url: Option<String>,
    pub detected_at: Option<NaiveDateTime>,
    pub metadata: Option<serde_json::Value>,
}

/// Curated signal-event feed consumed by the scheduled signal run.
///
/// A detection pipeline would replace this function; until then the
/// scheduled run ingests this fixed set, relying on (company, title)
/// dedup to make repeated ingestion a no-op.
pub fn curated_signals() -> Vec<SignalEvent> {
    vec![
        SignalEvent {
            company_name: "Stripe".to_string(),
            signal_type: SignalType::Funding,
            title: "Stripe raises $6.5B Series H funding".to_string(),
            description: "Stripe announced a massive Series H funding round, bringing their valuation to $50B.".to_string(),
            confidence_score: Some(9.0),
            source_url: Some("https://techcrunch.com/stripe-funding".to_string()),
            detected_at: None,
            metadata: Some(json!({
                "funding_amount": "$6.5B",
                "valuation": "$50B",
                "round_type": "Series H",
            })),
        },
        SignalEvent {
            company_name: "OpenAI".to_string(),
            signal_type: SignalType::JobPosting,
            title: "OpenAI posts 15+ senior engineering roles".to_string(),
            description: "OpenAI has posted multiple senior engineering positions across AI Research teams.".to_string(),
            confidence_score: Some(8.0),
            source_url: Some("https://openai.com/careers".to_string()),
            detected_at: None,
            metadata: Some(json!({
                "job_count": 15,
                "departments": ["AI Research", "Platform Engineering"],
            })),
        },
        SignalEvent {
            company_name: "Linear".to_string(),
            signal_type: SignalType::OfficeOpening,
            title: "Linear opens new San Francisco office".to_string(),
            description: "Linear announced opening a 50-person office in San Francisco.".to_string(),
            confidence_score: Some(8.0),
            source_url: Some("https://linear.app/blog/sf-office".to_string()),
            detected_at: None,
            metadata: Some(json!({
                "office_size": "50 people",
                "location": "San Francisco, CA",
            })),
        },
    ]
}
