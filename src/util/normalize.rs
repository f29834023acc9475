//! Normalization helpers shared by every source fetcher.
//!
//! A job listing is recognized across providers and fetch runs by a content
//! fingerprint over its (title, company, location) triple, and its free-text
//! location is classified into a remote/country shape before persistence.

use std::sync::LazyLock;

use entity::sea_orm_active_enums::RemoteType;
use regex::Regex;
use sha2::{Digest, Sha256};

/// Remote classification derived from a listing's location and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteClassification {
    pub is_remote: bool,
    pub remote_type: Option<RemoteType>,
}

const REMOTE_KEYWORDS: [&str; 4] = ["remote", "work from home", "wfh", "anywhere"];

static COUNTRY_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bUSA?\b|\bUnited States\b", "United States"),
        (r"(?i)\bUK\b|\bUnited Kingdom\b", "United Kingdom"),
        (r"(?i)\bCanada\b", "Canada"),
        (r"(?i)\bAustralia\b", "Australia"),
        (r"(?i)\bGermany\b", "Germany"),
        (r"(?i)\bFrance\b", "France"),
    ]
    .into_iter()
    .map(|(pattern, country)| {
        (
            Regex::new(pattern).expect("country pattern must compile"),
            country,
        )
    })
    .collect()
});

/// Computes the content fingerprint used for cross-provider deduplication.
///
/// Lower-cases all three inputs, strips all whitespace, joins them with a
/// separator and hashes the result. Two listings with the same normalized
/// (title, company, location) triple collapse to the same fingerprint no
/// matter which provider they came from.
pub fn fingerprint(title: &str, company: &str, location: &str) -> String {
    fn squash(input: &str) -> String {
        input.to_lowercase().split_whitespace().collect()
    }

    let input = format!(
        "{}||{}||{}",
        squash(title),
        squash(company),
        squash(location)
    );

    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Classifies a listing as hybrid, fully remote, or onsite.
///
/// Scans the combined lower-cased location + description text. The hybrid
/// keyword is checked first and short-circuits, so "Hybrid - Remote OK"
/// classifies as hybrid rather than fully remote.
pub fn classify_location(location: &str, description: &str) -> RemoteClassification {
    let text = format!("{} {}", location, description).to_lowercase();

    if text.contains("hybrid") {
        return RemoteClassification {
            is_remote: true,
            remote_type: Some(RemoteType::Hybrid),
        };
    }

    if REMOTE_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return RemoteClassification {
            is_remote: true,
            remote_type: Some(RemoteType::FullyRemote),
        };
    }

    RemoteClassification {
        is_remote: false,
        remote_type: None,
    }
}

/// Extracts a canonical country name from a free-text location.
///
/// Patterns are tried in order and the first match wins; `None` when the
/// location names no supported country.
pub fn extract_country(location: &str) -> Option<&'static str> {
    COUNTRY_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(location))
        .map(|(_, country)| *country)
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::RemoteType;

    use super::{classify_location, extract_country, fingerprint};

    /// Expect identical hashes for identical input across repeated calls
    #[test]
    fn test_fingerprint_deterministic() {
        let first = fingerprint("Engineer", "Acme", "NYC");
        let second = fingerprint("Engineer", "Acme", "NYC");

        assert_eq!(first, second);
    }

    /// Expect case and whitespace differences to collapse to the same hash
    #[test]
    fn test_fingerprint_case_and_whitespace_insensitive() {
        let canonical = fingerprint("Engineer", "Acme", "NYC");
        let noisy = fingerprint(" engineer ", "ACME", "nyc");

        assert_eq!(canonical, noisy);
    }

    /// Expect different triples to produce different hashes
    #[test]
    fn test_fingerprint_distinguishes_triples() {
        let engineer = fingerprint("Engineer", "Acme", "NYC");
        let designer = fingerprint("Designer", "Acme", "NYC");

        assert_ne!(engineer, designer);
    }

    /// Expect hybrid to win over the generic remote keyword in the same text
    #[test]
    fn test_classify_location_hybrid_precedence() {
        let classification = classify_location("Hybrid - Remote OK", "");

        assert!(classification.is_remote);
        assert_eq!(classification.remote_type, Some(RemoteType::Hybrid));
    }

    /// Expect remote keywords in the description alone to classify as remote
    #[test]
    fn test_classify_location_remote_from_description() {
        let classification = classify_location("Austin, TX", "This is a fully remote role");

        assert!(classification.is_remote);
        assert_eq!(classification.remote_type, Some(RemoteType::FullyRemote));
    }

    /// Expect onsite text to classify as not remote with no remote type
    #[test]
    fn test_classify_location_onsite() {
        let classification = classify_location("Austin, TX", "in-office role");

        assert!(!classification.is_remote);
        assert_eq!(classification.remote_type, None);
    }

    /// Expect country abbreviations and full names to resolve identically
    #[test]
    fn test_extract_country_matches_abbreviations() {
        assert_eq!(extract_country("New York, USA"), Some("United States"));
        assert_eq!(extract_country("Boston, United States"), Some("United States"));
        assert_eq!(extract_country("London, UK"), Some("United Kingdom"));
        assert_eq!(extract_country("Toronto, Canada"), Some("Canada"));
    }

    /// Expect None when no supported country appears in the location
    #[test]
    fn test_extract_country_unknown() {
        assert_eq!(extract_country("Springfield"), None);
    }
}
