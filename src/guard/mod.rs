//! Guard that keeps test-only code out of production binaries.
//!
//! Helpers meant only for tests call [`must_be_testing`] on entry. In a
//! binary built without a test marker the call aborts the process, so a
//! helper that was wired into a production path fails loudly instead of
//! running.

use tracing::error;

/// Compile-time facts about how this binary was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMarkers {
    /// Built by the standard test harness (`cargo test` unit tests).
    pub test_harness: bool,
    /// Built with the `integration-tests` feature.
    pub integration_tests: bool,
}

impl BuildMarkers {
    /// Markers of the running binary.
    pub const fn current() -> Self {
        Self {
            test_harness: cfg!(test),
            integration_tests: cfg!(feature = "integration-tests"),
        }
    }

    /// Whether test-only code may run under these markers.
    pub const fn allows_test_code(self) -> bool {
        self.test_harness || self.integration_tests
    }
}

/// Aborts the process unless it was built as a test binary.
///
/// Checked afresh on every call; safe to call from any number of threads.
pub fn must_be_testing() {
    enforce(BuildMarkers::current());
}

/// Aborts the process unless `markers` allow test-only code.
pub fn enforce(markers: BuildMarkers) {
    if !markers.allows_test_code() {
        invariant_violation("test-only code reached outside of a test build");
    }
}

/// Terminates the process for a broken invariant.
///
/// Unlike a panic this cannot be caught or unwound; callers never see it
/// return.
pub fn invariant_violation(message: &str) -> ! {
    error!("invariant violation, aborting: {message}");
    std::process::abort()
}
