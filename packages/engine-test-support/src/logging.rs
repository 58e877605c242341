//! Test logging shared by unit and integration tests of the engine.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Level used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Resolve the filter directive: `TEST_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_TEST_FILTER`].
pub fn test_filter() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_TEST_FILTER.to_string())
}

/// Install a test-captured subscriber once per process.
///
/// Safe to call from every test; later calls are no-ops. Turn on engine
/// logs with `TEST_LOG=jamb_engine=debug cargo test`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(EnvFilter::new(test_filter()))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
