//! Tracing initialization.
//!
//! The ledger crates emit structured events (conflict rejections, dropped
//! batch edits, compensation failures) through `tracing`; this wires them to
//! a JSON formatter so an embedding process gets machine-readable logs.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset: ledger crates at debug,
/// everything else at info.
const DEFAULT_FILTER: &str = "info,tagledger=debug";

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], but with an explicit fallback filter directive for when
/// `RUST_LOG` is unset. Useful in tests that want a quieter baseline.
pub fn init_with_default(fallback: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
