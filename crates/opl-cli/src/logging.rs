//! Logging setup via `tracing-subscriber`.
//!
//! The verbosity flags pick the default level; `RUST_LOG` can still narrow
//! or widen individual targets on top of it.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber. Call once at startup.
pub fn init_logging(level: LevelFilter, with_ansi: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(with_ansi)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry().with(filter).with(layer).init();
}
