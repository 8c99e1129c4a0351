// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Installs a `tracing` fmt subscriber whose filter is read from
//! `FACILITY_MAP_LOG` (same syntax as `RUST_LOG`). Without it only warnings
//! and errors are printed.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "FACILITY_MAP_LOG";

/// Filter used when `FACILITY_MAP_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Calling it twice is harmless: the second
/// installation attempt is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
