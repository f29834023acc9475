use std::time::Instant;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::error::ingest::IngestError;
use crate::error::Error;
use crate::model::report::{RunReport, RunStats, SignalStats};
use crate::model::signal::SignalEvent;
use crate::service::job::JobService;
use crate::service::matcher::MatcherService;
use crate::service::rotation::RotationService;
use crate::service::signal::SignalService;
use crate::service::source::adzuna::AdzunaSource;
use crate::service::source::greenhouse::GreenhouseSource;
use crate::service::source::remotive::RemotiveSource;
use crate::service::source::{JobSource, SourceConfig, ADZUNA, REMOTIVE};

/// Orchestrates one ingestion run: source selection, fetch, dedup/insert,
/// preference matching, and the structured run report.
///
/// Built with injected collaborators (store connection, HTTP client, source
/// config); no ambient singletons. The trigger boundary (`run_jobs`,
/// `run_signals`) always returns a well-formed report and never propagates
/// an error to the caller, scheduled or manual.
#[derive(Clone)]
pub struct IngestService {
    db: DatabaseConnection,
    http: reqwest::Client,
    sources: SourceConfig,
}

impl IngestService {
    /// Creates a new instance of [`IngestService`]
    pub fn new(db: DatabaseConnection, http: reqwest::Client, sources: SourceConfig) -> Self {
        Self { db, http, sources }
    }

    /// Runs one job-ingestion pass.
    pub async fn run_jobs(&self) -> RunReport<RunStats> {
        let timestamp = Utc::now();
        let started = Instant::now();

        match self.execute_job_run().await {
            Ok(stats) => {
                tracing::info!(
                    "Job ingestion complete: {} inserted, {} skipped, {} alerts",
                    stats.inserted,
                    stats.skipped,
                    stats.alerts_created
                );
                RunReport::completed(timestamp, stats, started.elapsed())
            }
            Err(err) => {
                tracing::error!("Job ingestion run failed: {}", err);
                RunReport::failed(timestamp, err.to_string(), started.elapsed())
            }
        }
    }

    /// Runs one hiring-signal ingestion pass over the given events.
    pub async fn run_signals(&self, events: &[SignalEvent]) -> RunReport<SignalStats> {
        let timestamp = Utc::now();
        let started = Instant::now();

        let signal_service = SignalService::new(&self.db);
        let stats = signal_service.ingest_signals(events).await;

        // Per-event errors are reported in the stats; the run only counts
        // as failed when every event in a non-empty batch errored.
        if !events.is_empty() && stats.errors.len() == events.len() {
            tracing::error!("Signal ingestion run failed for every event");
            return RunReport::failed(
                timestamp,
                format!("All {} signal events failed", events.len()),
                started.elapsed(),
            );
        }

        tracing::info!(
            "Signal ingestion complete: {} processed, {} skipped, {} alerts",
            stats.processed,
            stats.skipped,
            stats.alerts_created
        );
        RunReport::completed(timestamp, stats, started.elapsed())
    }

    async fn execute_job_run(&self) -> Result<RunStats, Error> {
        let rotation_service = RotationService::new(&self.db);

        let Some(provider) = rotation_service.select_next().await? else {
            return Err(IngestError::NoCapacity.into());
        };

        let api_source = self.api_source(&provider)?;
        let feed_source =
            GreenhouseSource::new(self.http.clone(), self.sources.greenhouse_feeds.clone());

        // Distinct providers fetch concurrently; everything downstream of
        // the fetch stage is one sequential pass.
        let (api_result, feed_result) = tokio::join!(api_source.fetch(), feed_source.fetch());

        let mut stats = RunStats::default();
        let mut drafts = Vec::new();
        let mut failed_sources = 0;

        match api_result {
            Ok(jobs) => {
                rotation_service.record_usage(&provider, true, None).await?;
                stats.fetched_per_source.insert(provider.clone(), jobs.len());
                drafts.extend(jobs);
            }
            Err(err) => {
                tracing::warn!("{} fetch failed: {}", provider, err);
                rotation_service
                    .record_usage(&provider, false, Some(err.to_string()))
                    .await?;
                stats.fetched_per_source.insert(provider.clone(), 0);
                failed_sources += 1;
            }
        }

        let feed_name = feed_source.name();
        match feed_result {
            Ok(jobs) => {
                stats
                    .fetched_per_source
                    .insert(feed_name.to_string(), jobs.len());
                drafts.extend(jobs);
            }
            Err(err) => {
                tracing::warn!("{} fetch failed: {}", feed_name, err);
                stats.fetched_per_source.insert(feed_name.to_string(), 0);
                failed_sources += 1;
            }
        }

        if failed_sources == 2 {
            return Err(IngestError::AllSourcesFailed.into());
        }

        let outcome = JobService::new(&self.db).insert_jobs(drafts).await?;
        stats.inserted = outcome.inserted;
        stats.skipped = outcome.skipped;

        stats.alerts_created = MatcherService::new(&self.db)
            .match_new_jobs(&outcome.inserted_ids)
            .await?;

        Ok(stats)
    }

    fn api_source(&self, provider: &str) -> Result<Box<dyn JobSource>, Error> {
        match provider {
            ADZUNA => Ok(Box::new(AdzunaSource::new(
                self.http.clone(),
                &self.sources,
            ))),
            REMOTIVE => Ok(Box::new(RemotiveSource::new(
                self.http.clone(),
                &self.sources,
            ))),
            _ => Err(IngestError::UnknownSource(provider.to_string()).into()),
        }
    }
}
