use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year][month][day]_[hour][minute][second]");

/// Where process diagnostics go after `init_logging`.
///
/// `File` is the durable sink; the caller owns the handle and should
/// `sync()` it at shutdown. `Stdout` is the degraded fallback when the
/// durable sink could not be created.
#[derive(Debug)]
pub enum LogSink {
    File { path: PathBuf, file: Arc<File> },
    Stdout,
}

impl LogSink {
    pub fn is_durable(&self) -> bool {
        matches!(self, LogSink::File { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            LogSink::File { path, .. } => Some(path),
            LogSink::Stdout => None,
        }
    }

    /// Flush buffered log data to disk. A no-op for the degraded sink.
    pub fn sync(&self) -> io::Result<()> {
        match self {
            LogSink::File { file, .. } => file.sync_all(),
            LogSink::Stdout => Ok(()),
        }
    }
}

/// Route diagnostics to stdout and a timestamped file under `logs/`.
pub fn init_logging(base_name: &str) -> LogSink {
    init_logging_in(Path::new(LOG_DIR), base_name)
}

/// Route diagnostics to stdout and a timestamped file under `dir`.
///
/// Failure to create the durable sink degrades to stdout-only logging; it is
/// never an error to the caller. Installation is idempotent - a subscriber
/// installed earlier (another bootstrap call, a test harness) stays in place.
pub fn init_logging_in(dir: &Path, base_name: &str) -> LogSink {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,sea_orm=warn,mongodb=warn"));

    match open_log_file(dir, base_name) {
        Ok((path, file)) => {
            let file = Arc::new(file);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_target(false))
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Arc::clone(&file)),
                )
                .try_init()
                .ok();
            info!("logging=ready sink=file path={}", path.display());
            LogSink::File { path, file }
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_target(false))
                .try_init()
                .ok();
            warn!("logging=degraded sink=stdout err={}", e);
            LogSink::Stdout
        }
    }
}

fn open_log_file(dir: &Path, base_name: &str) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;

    let stamp = OffsetDateTime::now_utc()
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let path = dir.join(format!("{stamp}_{base_name}"));

    let file = OpenOptions::new().append(true).create(true).open(&path)?;
    Ok((path, file))
}
