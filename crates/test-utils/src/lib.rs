//! Shared fixtures for the `pkgignore` test suites.
//!
//! [`builders`] assembles mock package trees and matchers; [`init_tracing`]
//! makes the library's `tracing` output visible when a test fails.

pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Route `tracing` events from `pkgignore` into the test harness.
///
/// Output is captured per test and only shown for failures. Pattern
/// rejections are logged at `warn`, pruned directories at `trace`; pick the
/// level with `RUST_LOG=pkgignore=trace`. Repeated calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pkgignore=info"));

        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}
