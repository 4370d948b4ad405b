//! Logger utility for application-wide logging
//!
//! This module provides a logger implementation that works alongside
//! the standard log crate, writing every record to a file and echoing
//! it to the console.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level this logger records
    level: Level,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        Logger::with_level(log_file, Level::Info)
    }

    /// Creates a new logger recording records up to `level`
    pub fn with_level(log_file: &str, level: Level) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Creates a logger that discards file output
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: Level::Info,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// `verbose` lowers the threshold from info to debug.
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        let level = if verbose { Level::Debug } else { Level::Info };
        let global_logger = Logger::with_level(log_file, level)?;

        // Only called once at startup; a second call keeps the first logger
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Echo on stderr so command output on stdout stays clean
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_logger_records_to_file() {
        let path = std::env::temp_dir().join(format!("sopotmap-global-{}.log", std::process::id()));
        let path_str = path.to_str().unwrap();

        Logger::init_global_logger(path_str, false).unwrap();
        log::info!("global logger installed");
        log::debug!("below threshold");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[INFO] global logger installed"));
        assert!(!content.contains("below threshold"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_disabled_logger_accepts_messages() {
        assert!(Logger::disabled().log("dropped").is_ok());
    }
}
