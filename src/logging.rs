/// Console logging setup
///
/// Logs go to stderr through a `tracing` fmt layer. The level defaults to
/// `info` and can be overridden with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset or invalid.
/// wgpu and friends are noisy at info, so keep them at warn.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,iced_wgpu=warn";

/// Install the global subscriber. Call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
