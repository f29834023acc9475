use thiserror::Error;

/// Run-level aborts for an ingestion pass.
///
/// These terminate the run early but are still reported through the
/// structured run report rather than propagating to the trigger boundary.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("No API provider with remaining quota is available")]
    NoCapacity,
    #[error("Unknown job source: {0}")]
    UnknownSource(String),
    #[error("Every source in this run failed to fetch")]
    AllSourcesFailed,
}
