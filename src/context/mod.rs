//! Startup context carrying the resolved configuration.

use tracing::Level;

use crate::config::ServerConfig;
use crate::logging::level_for;
use crate::Error;

/// Process context built once from the resolved [`ServerConfig`].
///
/// Holds the log level derived from the config so the logging sink is
/// constructed from it directly.
///
/// ## Example
///
/// ```no_run
/// use ingest_relay::{config, logging, AppContext};
///
/// let ctx = AppContext::builder()
///     .with_config(config::resolve("relay.yaml", &config::Overrides::default())?)
///     .build()?;
///
/// logging::init(ctx.log_level())?;
/// # Ok::<(), ingest_relay::Error>(())
/// ```
#[derive(Debug)]
pub struct AppContext {
    config: ServerConfig,
    log_level: Level,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder<()> {
        AppContextBuilder { config: None }
    }

    /// Returns the resolved configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Level the logging sink should be built with.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

/// Builder for constructing an [`AppContext`].
///
/// Starts without a config (`AppContextBuilder<()>`) and moves to
/// `AppContextBuilder<ServerConfig>` once [`with_config`](Self::with_config)
/// is called.
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder<C> {
    config: Option<C>,
}

impl AppContextBuilder<()> {
    /// Attaches the resolved configuration.
    pub fn with_config(self, config: ServerConfig) -> AppContextBuilder<ServerConfig> {
        AppContextBuilder {
            config: Some(config),
        }
    }

    /// Fails: no configuration was attached.
    pub fn build(self) -> Result<AppContext, Error> {
        Err(Error::MissingConfig)
    }
}

impl AppContextBuilder<ServerConfig> {
    /// Builds the `AppContext`.
    pub fn build(self) -> Result<AppContext, Error> {
        let config = self.config.ok_or(Error::MissingConfig)?;
        Ok(AppContext {
            log_level: level_for(config.verbose),
            config,
        })
    }
}
