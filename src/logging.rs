//! Logging utilities for salesgen
//!
//! Re-exports tracing macros with log_* naming convention for consistency,
//! plus the subscriber setup used by the binary.

pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    warn as log_warn,
};

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Honors `RUST_LOG`; falls back to `info` when it is unset or unparsable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}
