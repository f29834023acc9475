use thiserror::Error;

/// Failure against a single upstream provider.
///
/// Recovered locally by the orchestrator: the provider's stats for the run
/// drop to zero and the failure is recorded against its quota state, but
/// sibling providers in the same run are unaffected.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{provider} request failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} returned HTTP {status}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("Failed to parse {provider} response: {reason}")]
    Parse {
        provider: &'static str,
        reason: String,
    },
}
