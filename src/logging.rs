// src/logging.rs

use crate::errors::{CabinetError, CabinetResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

/// Starts the file logger. Logs go to `cabinet.log` in the working
/// directory so nothing is ever printed over the TUI.
pub fn init_logging(level: &str) -> CabinetResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| CabinetError::logging_error(format!("invalid log level spec: {}", e)))?
        .log_to_file(FileSpec::default().basename("cabinet").suppress_timestamp())
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .map_err(|e| CabinetError::logging_error(format!("failed to start logger: {}", e)))
}
