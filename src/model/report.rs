use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Structured outcome of one scheduled or manual ingestion run.
///
/// This is the only thing the trigger boundary ever returns: a successful
/// run carries stats, an aborted run carries the error string, and neither
/// case propagates an exception to the caller.
#[derive(Debug, Serialize)]
pub struct RunReport<S> {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl<S> RunReport<S> {
    pub fn completed(timestamp: DateTime<Utc>, stats: S, duration: Duration) -> Self {
        Self {
            success: true,
            timestamp,
            stats: Some(stats),
            error: None,
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn failed(timestamp: DateTime<Utc>, error: String, duration: Duration) -> Self {
        Self {
            success: false,
            timestamp,
            stats: None,
            error: Some(error),
            duration_ms: duration.as_millis() as u64,
        }
    }
}

/// Per-run statistics for the job ingestion path.
#[derive(Debug, Default, Serialize)]
pub struct RunStats {
    /// Listings fetched per source; a failed source reports zero.
    pub fetched_per_source: BTreeMap<String, usize>,
    pub inserted: usize,
    pub skipped: usize,
    pub alerts_created: usize,
}

/// Per-run statistics for the hiring-signal ingestion path.
#[derive(Debug, Default, Serialize)]
pub struct SignalStats {
    pub processed: usize,
    pub skipped: usize,
    pub alerts_created: usize,
    /// Per-event errors; an entry here never aborts sibling events.
    pub errors: Vec<String>,
}
