// src/log.rs
//
// Logging setup: human-readable lines on stderr plus a plain copy in
// `.store/debug.log`. Timestamps are elapsed time since start.

use std::{fs, io, path::PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::uptime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Install the global subscriber. Keep the returned guard alive until exit,
/// or buffered file lines are lost.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
pub fn init(verbose: bool) -> io::Result<WorkerGuard> {
    let dir = PathBuf::from(STORE_DIR);
    fs::create_dir_all(&dir)?;

    let (file_writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, LOG_FILE));

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={default_level},warn", env!("CARGO_CRATE_NAME"))));

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(uptime())
        .with_target(false);

    let file = fmt::layer()
        .with_writer(file_writer)
        .with_timer(uptime())
        .with_ansi(false);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init();

    Ok(guard)
}

/// Where the debug log ends up.
pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}
