pub mod jobs {
    /// Cron expression for the job ingestion run
    /// Runs every 4 hours at the top of the hour (00:00, 04:00, 08:00, etc.)
    pub const CRON_EXPRESSION: &str = "0 0 */4 * * *";
}

pub mod signals {
    /// Cron expression for the hiring-signal ingestion run
    /// Offset half an hour from the job run (00:30, 04:30, 08:30, etc.)
    pub const CRON_EXPRESSION: &str = "0 30 */4 * * *";
}
