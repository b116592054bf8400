//! File-based configuration source.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::FormatError;
use super::source::PartialConfig;
use super::ConfigError;

/// Serialization format of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Toml,
    Json,
}

impl FileFormat {
    /// Picks the format for `path`.
    ///
    /// `.yaml`/`.yml` and extension-less paths read as YAML, `.toml` as TOML
    /// and `.json` as JSON. Returns `None` for any other extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let Some(ext) = path.extension() else {
            return Some(FileFormat::Yaml);
        };
        let ext = ext.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(FileFormat::Yaml),
            "toml" => Some(FileFormat::Toml),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }
}

/// The optional config file layer.
///
/// An empty path means no file was requested; loading it yields an empty
/// [`PartialConfig`].
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a file source for `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns `true` if no file was requested.
    pub fn is_empty(&self) -> bool {
        self.path.as_os_str().is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file and returns the fields it sets.
    pub fn load(&self) -> Result<PartialConfig, ConfigError> {
        parse_file(&self.path)
    }
}

/// Loads and parses a config file into a [`PartialConfig`].
///
/// The file is accepted entirely or rejected entirely. An empty path and an
/// empty file both yield a config with no fields set.
pub fn parse_file(path: impl AsRef<Path>) -> Result<PartialConfig, ConfigError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        debug!("no config file given, using defaults");
        return Ok(PartialConfig::default());
    }

    let format = FileFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), ?format, "loaded config file");

    parse_str(&contents, format).map_err(|failure| match failure {
        Failure::Syntax(source) => ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        Failure::Type(source) => ConfigError::TypeError {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Which stage of decoding rejected the document.
enum Failure {
    Syntax(FormatError),
    Type(FormatError),
}

/// Parses the document first, then decodes its fields, so syntax errors and
/// type errors are told apart.
///
/// Top-level keys match case-insensitively; keys that are not strings can
/// never name a field and are dropped along with other unknown keys.
fn parse_str(contents: &str, format: FileFormat) -> Result<PartialConfig, Failure> {
    if contents.trim().is_empty() {
        return Ok(PartialConfig::default());
    }

    match format {
        FileFormat::Yaml => {
            let document: serde_yaml::Value =
                serde_yaml::from_str(contents).map_err(|e| Failure::Syntax(e.into()))?;
            let mapping = match document {
                serde_yaml::Value::Null => return Ok(PartialConfig::default()),
                serde_yaml::Value::Mapping(mapping) => mapping,
                _ => return Err(Failure::Syntax(FormatError::NotAMapping)),
            };
            let mapping: serde_yaml::Mapping = mapping
                .into_iter()
                .filter_map(|(key, value)| match key {
                    serde_yaml::Value::String(key) => {
                        Some((serde_yaml::Value::String(key.to_lowercase()), value))
                    }
                    _ => None,
                })
                .collect();
            serde_yaml::from_value(serde_yaml::Value::Mapping(mapping))
                .map_err(|e| Failure::Type(e.into()))
        }
        FileFormat::Json => {
            let document: serde_json::Value =
                serde_json::from_str(contents).map_err(|e| Failure::Syntax(e.into()))?;
            let object = match document {
                serde_json::Value::Null => return Ok(PartialConfig::default()),
                serde_json::Value::Object(object) => object,
                _ => return Err(Failure::Syntax(FormatError::NotAMapping)),
            };
            let object: serde_json::Map<String, serde_json::Value> = object
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect();
            serde_json::from_value(serde_json::Value::Object(object))
                .map_err(|e| Failure::Type(e.into()))
        }
        FileFormat::Toml => {
            let table: toml::Table =
                toml::from_str(contents).map_err(|e| Failure::Syntax(e.into()))?;
            let table: toml::Table = table
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect();
            toml::Value::Table(table)
                .try_into()
                .map_err(|e: toml::de::Error| Failure::Type(e.into()))
        }
    }
}
