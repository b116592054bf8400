//! Calls the test guard once and exits.
//!
//! Built like any production binary, so the guard aborts it unless the
//! `integration-tests` feature is enabled.

use ingest_relay::logging;
use tracing::{info, Level};

fn main() -> Result<(), ingest_relay::Error> {
    logging::init(Level::INFO)?;
    ingest_relay::must_be_testing();
    info!("guard passed");
    Ok(())
}
