//! Scheduler for the periodic ingestion runs.
//!
//! A cron-based job scheduler drives the job-ingestion and hiring-signal
//! passes at the configured intervals. Each firing produces a structured
//! run report which is logged; a failed run never takes the scheduler down.

use std::sync::Arc;

use serde::Serialize;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::Error;
use crate::model::report::RunReport;
use crate::model::signal::curated_signals;
use crate::service::ingest::IngestService;

pub mod config;

/// Job scheduler for the recurring ingestion passes.
pub struct Scheduler {
    ingest: IngestService,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    pub async fn new(ingest: IngestService) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { ingest, sched })
    }

    /// Registers the ingestion jobs and starts the scheduler.
    ///
    /// Two recurring runs are registered: job ingestion and hiring-signal
    /// ingestion, offset from each other so the passes don't contend for
    /// the store. Once started, jobs fire until the process exits.
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_run(config::jobs::CRON_EXPRESSION, "job ingestion", |ingest| async move {
            ingest.run_jobs().await
        })
        .await?;

        self.schedule_run(
            config::signals::CRON_EXPRESSION,
            "signal ingestion",
            |ingest| async move { ingest.run_signals(&curated_signals()).await },
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring ingestion run with the given cron expression.
    ///
    /// The function receives a clone of the ingest service and returns the
    /// run's report; success and failure are logged, and the serialized
    /// report is emitted at debug level.
    pub async fn schedule_run<F, Fut, S>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(IngestService) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = RunReport<S>> + Send + 'static,
        S: Serialize + Send + 'static,
    {
        let ingest = self.ingest.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let ingest = ingest.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    let report = function(ingest).await;

                    if let Ok(serialized) = serde_json::to_string(&report) {
                        tracing::debug!("{} report: {}", name, serialized);
                    }

                    if report.success {
                        tracing::info!("Completed {} run in {}ms", name, report.duration_ms);
                    } else {
                        tracing::error!(
                            "{} run failed: {}",
                            name,
                            report.error.as_deref().unwrap_or("unknown error")
                        );
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
