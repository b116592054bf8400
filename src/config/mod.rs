//! Configuration resolution: defaults, an optional file, explicit overrides.

mod builder;
mod error;
mod file;
mod server;
mod source;

pub use builder::{resolve, Resolver};
pub use error::{ConfigError, FormatError};
pub use file::{parse_file, FileFormat, FileSource};
pub use server::{merge, ServerConfig, DEFAULT_PORT};
pub use source::{Overrides, PartialConfig};
