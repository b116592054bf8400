//! Process-wide `tracing` setup.
//!
//! The level comes from the resolved config and is passed in explicitly;
//! nothing here reads or mutates a global verbosity setting.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::guard::must_be_testing;
use crate::Error;

/// Log level for the given verbosity flag.
pub fn level_for(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs a stderr subscriber as the global default.
///
/// Fails if a global subscriber is already installed.
pub fn init(level: Level) -> Result<(), Error> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Routes log output through the test harness's captured output.
///
/// Test-only: aborts the process when called from a non-test build. Safe to
/// call from every test; only the first call installs the subscriber.
pub fn init_for_tests() {
    must_be_testing();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
