use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber. `rust_log` is either a bare level
/// (`info`, `debug`, ...) applied to this crate, its binaries and `tower_http`,
/// or a full `EnvFilter` directive set used as is.
pub fn init(rust_log: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter_directives(rust_log))
        .map_err(|err| anyhow!("invalid RUST_LOG '{rust_log}': {err}"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

/// Log targets of this package: the library and server binary share the
/// package name, the static builder logs under its own crate name.
const TARGETS: &[&str] = &[env!("CARGO_PKG_NAME"), "build_static", "tower_http"];

pub fn filter_directives(rust_log: &str) -> String {
    let rust_log = rust_log.trim();
    if rust_log.contains('=') || rust_log.contains(',') {
        rust_log.to_string()
    } else {
        let level = if rust_log.is_empty() { "info" } else { rust_log };
        TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
