//! Diagnostic tracing for the reporter binary.
//!
//! Stdout carries only the rendered report so it can be piped or parsed as
//! JSON. Every diagnostic, including the `info!` division-by-zero event and
//! the resolved config at `debug`, goes to stderr.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. Call once, before parsing operands.
///
/// `RUST_LOG` selects the level (e.g. `RUST_LOG=reporter=debug`); unset or
/// unparsable directives fall back to `warn`, which keeps a normal run silent.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
