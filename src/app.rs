//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use url::Url;

use crate::model::Config;
use crate::service::{NameScanner, ScreeningBackend, ScreeningServiceClient};

/// Application state containing all services and shared resources
pub struct AppState {
    /// Client for the external screening service
    pub backend: Arc<dyn ScreeningBackend>,
    /// Page fetcher for the quick name scan
    pub scanner: NameScanner,
}

impl AppState {
    /// Initialize all services from configuration
    ///
    /// Requires AI_SERVICE_URL pointing at the screening service; everything
    /// else has defaults.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let raw =
            std::env::var("AI_SERVICE_URL").map_err(|_| AppError::MissingConfig("AI_SERVICE_URL"))?;
        let target =
            Url::parse(&raw).map_err(|_| AppError::InvalidConfig("AI_SERVICE_URL is not a valid URL"))?;

        tracing::info!(target = %target, "Using screening service");

        Ok(Self {
            backend: Arc::new(ScreeningServiceClient::new(target)),
            scanner: NameScanner::new(config.namescan.clone()),
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
