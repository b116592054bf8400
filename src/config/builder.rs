use std::path::Path;

use tracing::debug;

use super::file::FileSource;
use super::server::{merge, ServerConfig};
use super::source::Overrides;
use super::ConfigError;

/// Builder that resolves the effective [`ServerConfig`] from its layers.
///
/// Precedence is fixed regardless of call order: built-in defaults, then the
/// config file, then the caller's explicit overrides. Each field is resolved
/// on its own, so a file that sets only `verbose` leaves the default port in
/// place.
///
/// ## Example
///
/// ```no_run
/// use ingest_relay::config::{Overrides, Resolver};
///
/// let config = Resolver::new()
///     .with_file("relay.yaml")
///     .with_overrides(Overrides::default().with_port(9090))
///     .resolve()?;
/// assert_eq!(config.port, 9090);
/// # Ok::<(), ingest_relay::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "resolvers do nothing until .resolve() is called"]
pub struct Resolver {
    file: FileSource,
    overrides: Overrides,
}

impl Resolver {
    /// Creates a resolver with no file and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the config file to read. An empty path means no file.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = FileSource::new(path);
        self
    }

    /// Sets the explicitly provided values, which win over file and defaults.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Runs the pipeline. A file error fails the whole resolution; no partial
    /// config is ever returned.
    pub fn resolve(self) -> Result<ServerConfig, ConfigError> {
        let file = self.file.load()?;
        let config = merge(ServerConfig::defaults(), &file, &self.overrides);
        debug!(
            file = %self.file.path().display(),
            from_file = ?file,
            overrides = ?self.overrides,
            ?config,
            "resolved configuration"
        );
        Ok(config)
    }
}

/// Resolves the effective config from an optional file path (empty for none)
/// and the caller's overrides.
pub fn resolve(path: impl AsRef<Path>, overrides: &Overrides) -> Result<ServerConfig, ConfigError> {
    Resolver::new()
        .with_file(path)
        .with_overrides(*overrides)
        .resolve()
}
