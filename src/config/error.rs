use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported config file type '{0}' (expected .yaml, .yml, .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: FormatError,
    },

    #[error("invalid value in config file '{path}': {source}")]
    TypeError {
        path: PathBuf,
        source: FormatError,
    },
}

/// Decoder error from whichever serialization format the file was read in.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("expected a key-value document at the top level")]
    NotAMapping,
}
