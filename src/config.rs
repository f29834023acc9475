use crate::error::config::ConfigError;
use crate::model::source::greenhouse::GreenhouseFeed;

const DEFAULT_ADZUNA_BASE_URL: &str = "https://api.adzuna.com";
const DEFAULT_REMOTIVE_BASE_URL: &str = "https://remotive.com";
const DEFAULT_GREENHOUSE_FEEDS: &str =
    "Airbnb=https://boards.greenhouse.io/embed/job_board?for=airbnb&format=rss";

pub struct Config {
    pub database_url: String,
    pub adzuna_app_id: String,
    pub adzuna_app_key: String,
    pub adzuna_base_url: String,
    pub remotive_base_url: String,
    pub greenhouse_feeds: Vec<GreenhouseFeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            adzuna_app_id: require("ADZUNA_APP_ID")?,
            adzuna_app_key: require("ADZUNA_APP_KEY")?,
            adzuna_base_url: optional("ADZUNA_BASE_URL", DEFAULT_ADZUNA_BASE_URL),
            remotive_base_url: optional("REMOTIVE_BASE_URL", DEFAULT_REMOTIVE_BASE_URL),
            greenhouse_feeds: parse_feeds(&optional(
                "GREENHOUSE_FEEDS",
                DEFAULT_GREENHOUSE_FEEDS,
            ))?,
        })
    }
}

fn require(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses the configured Greenhouse boards.
///
/// The format is `Company=feed_url` entries separated by `;`; the company
/// part names the board's employer since the feeds don't identify it.
fn parse_feeds(raw: &str) -> Result<Vec<GreenhouseFeed>, ConfigError> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(company, url)| GreenhouseFeed {
                    company: company.trim().to_string(),
                    url: url.trim().to_string(),
                })
                .filter(|feed| !feed.company.is_empty() && !feed.url.is_empty())
                .ok_or_else(|| ConfigError::InvalidEnvValue {
                    var: "GREENHOUSE_FEEDS".to_string(),
                    reason: format!(
                        "expected Company=url entries separated by ';', got {:?}",
                        entry
                    ),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_feeds;

    /// Expect well-formed feed entries to parse, keeping later '=' in the URL
    #[test]
    fn test_parse_feeds_success() {
        let feeds = parse_feeds(
            "Airbnb=https://boards.greenhouse.io/embed/job_board?for=airbnb&format=rss; \
             Acme=https://boards.greenhouse.io/embed/job_board?for=acme",
        )
        .unwrap();

        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[0].company, "Airbnb");
        assert!(feeds[0].url.contains("for=airbnb"));
        assert_eq!(feeds[1].company, "Acme");
    }

    /// Expect an entry without a separator to be rejected
    #[test]
    fn test_parse_feeds_invalid_entry() {
        let result = parse_feeds("Airbnb");

        assert!(result.is_err());
    }

    /// Expect empty segments between separators to be ignored
    #[test]
    fn test_parse_feeds_empty_segments() {
        let feeds = parse_feeds(";Airbnb=https://example.com/feed;;").unwrap();

        assert_eq!(feeds.len(), 1);
    }
}
