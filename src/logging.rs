//! File-only tracing setup. The terminal belongs to the TUI, so nothing
//! is ever logged to stdout or stderr.

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Base path for the log file. Unset or blank disables logging.
pub const ENV_LOG_PATH: &str = "FOLIO_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Per-run log file: `{base}.{unix_secs}.{pid}`.
fn log_file_path(base: &str, unix_secs: u64, pid: u32) -> Option<PathBuf> {
    let base = base.trim();
    if base.is_empty() {
        return None;
    }
    Some(PathBuf::from(format!("{base}.{unix_secs}.{pid}")))
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

pub fn init_tracing() {
    let base = std::env::var(ENV_LOG_PATH).unwrap_or_default();
    let unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let Some(path) = log_file_path(&base, unix_secs, std::process::id()) else {
        return;
    };

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("folio: cannot open log file {}: {err}", path.display());
            return;
        }
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();

    tracing::info!(path = %path.display(), "logging started");
}
