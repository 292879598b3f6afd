//! Logging utilities
//!
//! Standardized log lines for snapshot operations, so loads and saves read
//! the same way everywhere.

use std::path::Path;
use std::time::Duration;

/// Log the start of a file operation
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log a finished file operation with its record count and timing
pub fn log_operation_complete(operation: &str, path: &Path, records: usize, elapsed: Duration) {
    log::info!(
        "Successfully {} {} records ({}) in {:?}",
        operation,
        records,
        path.display(),
        elapsed
    );
}

/// Log a warning, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
