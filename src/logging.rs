//! Tracing subscriber setup. Logs go to stderr so the report on stdout stays clean.

use tracing_subscriber::{
    fmt::{fmt, time::ChronoLocal},
    EnvFilter,
};

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("logger initialized");
}
