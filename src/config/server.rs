use super::source::{Overrides, PartialConfig};

/// Port the relay listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// The fully resolved configuration of the relay process.
///
/// Every field always holds a value; it is built once at startup and only
/// read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub verbose: bool,
}

impl ServerConfig {
    /// The built-in baseline: port 8080, quiet logging.
    pub const fn defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            verbose: false,
        }
    }

    /// Returns a copy with every field set in `layer` replaced.
    pub fn overlay(self, layer: &PartialConfig) -> Self {
        Self {
            port: layer.port.unwrap_or(self.port),
            verbose: layer.verbose.unwrap_or(self.verbose),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Applies the layers field by field: file over defaults, then explicit
/// overrides over both.
pub fn merge(defaults: ServerConfig, file: &PartialConfig, overrides: &Overrides) -> ServerConfig {
    defaults.overlay(file).overlay(overrides)
}
