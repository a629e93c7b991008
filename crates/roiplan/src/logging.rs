//! File logging for the dashboard.
//!
//! The terminal belongs to ratatui, so everything goes to
//! `{data_dir}/roiplan.log`. The file is trimmed at startup once it grows
//! past [`MAX_LOG_BYTES`].

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::util::io::atomic_write_bytes;

pub const LOG_FILE_NAME: &str = "roiplan.log";

/// Size past which the log is trimmed (5 MB)
const MAX_LOG_BYTES: usize = 5 * 1024 * 1024;
/// Tail kept after trimming (1 MB)
const KEPT_LOG_BYTES: usize = 1024 * 1024;

const TRIM_MARKER: &[u8] = b"[log trimmed, earlier entries dropped]\n";

/// Cut `path` down to roughly its last `keep` bytes once it exceeds `max`.
///
/// The kept tail starts at a line boundary. Returns whether the file was
/// rewritten; a missing file is not an error.
fn trim_log(path: &Path, max: usize, keep: usize) -> io::Result<bool> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if bytes.len() <= max {
        return Ok(false);
    }

    let tail = &bytes[bytes.len().saturating_sub(keep)..];
    let first_full_line = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(tail.len(), |newline| newline + 1);

    let mut trimmed = Vec::with_capacity(TRIM_MARKER.len() + tail.len());
    trimmed.extend_from_slice(TRIM_MARKER);
    trimmed.extend_from_slice(&tail[first_full_line..]);
    atomic_write_bytes(path, &trimmed)?;
    Ok(true)
}

/// Start the global subscriber, writing to `{data_dir}/roiplan.log`.
///
/// `RUST_LOG` takes precedence over `level`, which only sets the verbosity of
/// the dashboard crate; the core crate logs warnings and up.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    let trimmed = match trim_log(&log_path, MAX_LOG_BYTES, KEPT_LOG_BYTES) {
        Ok(trimmed) => trimmed,
        Err(e) => {
            eprintln!("Warning: could not trim {}: {e}", log_path.display());
            false
        }
    };

    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roiplan={level},roiplan_core=warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), trimmed, "Logging started");
    Ok(())
}
