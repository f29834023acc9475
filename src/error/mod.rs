//! Error types for the earlyjob ingestion service.
//!
//! Domain-specific error enums (configuration, upstream fetching, run-level
//! ingestion aborts) are aggregated into a single [`Error`] type using
//! `thiserror`'s `#[from]` conversions so services can propagate with `?`.

pub mod config;
pub mod fetch;
pub mod ingest;

use thiserror::Error;

use crate::error::{config::ConfigError, fetch::FetchError, ingest::IngestError};

/// Main error type for the earlyjob ingestion service.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Upstream provider error (HTTP request, status, or payload parse).
    #[error(transparent)]
    FetchError(#[from] FetchError),
    /// Run-level ingestion abort (no quota capacity, unknown source).
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// Internal error indicating a bug in earlyjob's code.
    #[error("Internal error, this indicates a bug in earlyjob: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
