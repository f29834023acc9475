//! Source fetchers, one per upstream provider.
//!
//! Every fetcher maps its provider's raw payload into canonical
//! [`JobDraft`]s and never writes to the store; insertion belongs to the
//! dedup engine. A provider failing mid-run is recovered by the
//! orchestrator and must not abort its siblings.

pub mod adzuna;
pub mod greenhouse;
pub mod remotive;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::fetch::FetchError;
use crate::model::job::JobDraft;
use crate::model::source::greenhouse::GreenhouseFeed;

pub const ADZUNA: &str = "adzuna";
pub const REMOTIVE: &str = "remotive";
pub const GREENHOUSE: &str = "greenhouse";

/// API-style providers governed by quota rotation, with their monthly
/// request limits. Feed-style sources carry no quota and are not listed.
pub const ROTATION_PROVIDERS: &[(&str, i32)] = &[(ADZUNA, 250), (REMOTIVE, 1000)];

/// Uniform contract implemented by every upstream provider.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetches and normalizes the provider's current listings.
    async fn fetch(&self) -> Result<Vec<JobDraft>, FetchError>;
}

/// Provider endpoints and credentials shared by the fetchers.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    pub adzuna_base_url: String,
    pub adzuna_app_id: String,
    pub adzuna_app_key: String,
    pub remotive_base_url: String,
    pub greenhouse_feeds: Vec<GreenhouseFeed>,
}

impl SourceConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            adzuna_base_url: config.adzuna_base_url.clone(),
            adzuna_app_id: config.adzuna_app_id.clone(),
            adzuna_app_key: config.adzuna_app_key.clone(),
            remotive_base_url: config.remotive_base_url.clone(),
            greenhouse_feeds: config.greenhouse_feeds.clone(),
        }
    }
}
