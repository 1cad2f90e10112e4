//! Shared helpers for integration tests.

pub mod mock_store;

use tracing_subscriber::EnvFilter;

/// Installs a test tracing subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
