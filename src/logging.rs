//! Log output setup
//!
//! The TUI owns the terminal while it runs, so log events go to a file under the
//! data directory instead of stderr.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "projreg-tui";
const LOG_FILE_SUFFIX: &str = "log";

/// Path of the session log inside `dir`
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(format!("{LOG_FILE_PREFIX}.{LOG_FILE_SUFFIX}"))
}

/// Open (or create) the session log in `dir`, appending to earlier sessions
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))
}

/// Install the global subscriber.
///
/// Without an appender events are filtered and dropped; nothing is ever written
/// to the terminal. Keep the returned guard alive until exit so buffered lines
/// are flushed.
pub fn init(filter: EnvFilter, appender: Option<RollingFileAppender>) -> Option<WorkerGuard> {
    let Some(appender) = appender else {
        tracing_subscriber::registry().with(filter).init();
        return None;
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Some(guard)
}
