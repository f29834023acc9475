use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::error::Error;
use crate::service::rotation::RotationService;
use crate::service::source::ROTATION_PROVIDERS;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the HTTP client shared by every source fetcher
///
/// Timeouts live here, per request; the orchestrator does not time runs out
/// centrally.
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("earlyjob/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|err| Error::InternalError(format!("Failed to build HTTP client: {}", err)))
}

/// Seed rotation state for every known API provider
pub async fn seed_rotation_state(db: &DatabaseConnection) -> Result<(), Error> {
    RotationService::new(db)
        .ensure_providers(ROTATION_PROVIDERS)
        .await
}
