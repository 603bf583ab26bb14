//! File logging.
//!
//! The TUI owns stdout, so logs go to `dungeon-dice.log` through a
//! non-blocking writer. `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "dungeon-dice.log";

const DEFAULT_FILTER: &str = "dice_core=info,dungeon_dice=info";

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init_logging(log_dir: &Path) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let mut log_file_opts = OpenOptions::new();
    log_file_opts.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        log_file_opts.mode(0o600);
    }

    let log_file = log_file_opts.open(log_dir.join(LOG_FILE_NAME))?;
    let (non_blocking, guard) = non_blocking(log_file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    Ok(guard)
}
