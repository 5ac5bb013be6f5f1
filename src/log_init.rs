//! File logger for the `log` facade.

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs a logger appending records up to `level` to the file at `path`.
///
/// Fails if a global logger is already set.
pub fn init_logger(path: impl Into<PathBuf>, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        path: path.into(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
