//! Configuration fetch host-service contracts.

use std::{future::Future, pin::Pin};

use content_contract::SiteConfig;
use thiserror::Error;

/// Object-safe boxed future used by [`ConfigService`].
pub type ConfigFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Failure modes for the configuration fetch.
///
/// Any variant is terminal for the page load: there is no retry, and the
/// variant detail is logged while the user sees a fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The request failed before a response arrived.
    #[error("config request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("config request returned HTTP {0}")]
    Status(u16),
    /// The response body was not a valid configuration document.
    #[error("config payload is not valid JSON: {0}")]
    Parse(String),
}

/// Host service performing the single same-origin configuration fetch per page
/// load.
pub trait ConfigService {
    /// Fetches and parses the configuration document.
    fn load_config(&self) -> ConfigFuture<'_, Result<SiteConfig, ConfigError>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory config service returning a fixed document, for tests and native
/// builds.
pub struct FixedConfigService {
    config: SiteConfig,
}

impl FixedConfigService {
    /// Creates a service that always resolves to `config`.
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}

impl ConfigService for FixedConfigService {
    fn load_config(&self) -> ConfigFuture<'_, Result<SiteConfig, ConfigError>> {
        Box::pin(async { Ok(self.config.clone()) })
    }
}
