//! File-based logging.
//!
//! The terminal belongs to the TUI, so log output goes to rotating files
//! under the app root instead of stdout.

use std::fs;
use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts the rotating file logger in the given directory.
///
/// The returned handle must stay alive for the life of the process;
/// dropping it flushes and shuts the logger down. The level defaults to
/// `info` and can be overridden through `RUST_LOG`.
pub fn init(dir: &Path) -> Result<LoggerHandle, String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("failed to create log directory {}: {e}", dir.display()))?;

    Logger::try_with_env_or_str("info")
        .map_err(|e| format!("invalid log level: {e}"))?
        .log_to_file(FileSpec::default().directory(dir).basename("roster"))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .append()
        .start()
        .map_err(|e| format!("failed to start logger: {e}"))
}
