pub mod cli;
pub mod config;
pub mod context;
mod error;
pub mod guard;
pub mod logging;

pub use config::{ConfigError, ServerConfig};
pub use context::AppContext;
pub use error::Error;
pub use guard::must_be_testing;
