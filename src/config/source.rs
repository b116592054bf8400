//! Partial configuration layers and the lenient field decoding they share.

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;

/// A configuration fragment where only some fields are set.
///
/// `None` means the layer says nothing about the field; it never stands in
/// for a zero value. The file layer and the caller's overrides both take
/// this shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PartialConfig {
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: Option<u16>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub verbose: Option<bool>,
}

/// Values the caller set explicitly, e.g. from command-line flags.
///
/// Only `Some` fields take part in the merge, so `port: Some(0)` is an
/// explicit port 0 rather than "flag not given".
pub type Overrides = PartialConfig;

impl PartialConfig {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.port.is_none() && self.verbose.is_none()
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the verbosity flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }
}

/// Any scalar a config document may hold for a field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn kind(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "a boolean",
            Scalar::Int(_) => "an integer",
            Scalar::Float(_) => "a float",
            Scalar::Text(_) => "a string",
        }
    }
}

/// Decodes `port` from an integer or a numeric string.
fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Scalar>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw {
        Scalar::Int(n) => u16::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("port {n} is out of range 0-65535"))),
        Scalar::Text(s) => s
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid port {s:?}: expected an integer"))),
        other => Err(D::Error::custom(format!(
            "invalid port: expected an integer, found {}",
            other.kind()
        ))),
    }
}

/// Decodes `verbose` from a boolean, a boolean-like string, or an integer.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Scalar>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw {
        Scalar::Bool(b) => Ok(Some(b)),
        Scalar::Int(n) => Ok(Some(n != 0)),
        Scalar::Text(s) => parse_flag(s.trim())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid boolean {s:?}"))),
        other => Err(D::Error::custom(format!(
            "invalid boolean: found {}",
            other.kind()
        ))),
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
