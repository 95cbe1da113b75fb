//! Log writer module
//!
//! Appends timestamped lines to a single fixed-name log file. Writes are
//! serialized behind a mutex so the sink stays safe if the surrounding
//! server is ever made concurrent.

use super::LogSink;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Default log file name, relative to the running process.
pub const DEFAULT_LOG_FILE: &str = "solohttpd.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File-backed log sink.
pub struct FileLogger {
    file: Mutex<File>,
}

impl FileLogger {
    /// Create (or truncate) the log file and return a sink writing to it.
    ///
    /// The file is truncated once per process start so each run begins with
    /// a fresh log.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileLogger {
    fn log(&self, message: &str) {
        let stamped = format!("{} {message}", Local::now().format(TIMESTAMP_FORMAT));
        // Write failures are reported to stderr and otherwise swallowed;
        // the request outcome must not depend on the log sink.
        match self.file.lock() {
            Ok(mut file) => {
                if let Err(err) = writeln!(file, "{stamped}") {
                    eprintln!("[ERROR] Failed to write log line: {err}");
                }
            }
            Err(_) => eprintln!("[ERROR] Log writer lock poisoned, line dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");

        let logger = FileLogger::create(&path).unwrap();
        logger.log("[REQUEST] - GET /index.html");
        logger.log("[RESPONSE] - status: 404");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[REQUEST] - GET /index.html"));
        assert!(lines[1].ends_with("[RESPONSE] - status: 404"));
        // Timestamp prefix: "yyyy-MM-dd HH:mm:ss " is 20 characters.
        assert_eq!(&lines[0][4..5], "-");
        assert_eq!(&lines[0][10..11], " ");
        assert_eq!(&lines[0][13..14], ":");
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        std::fs::write(&path, "stale content\n").unwrap();

        let logger = FileLogger::create(&path).unwrap();
        logger.log("fresh");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert!(contents.contains("fresh"));
    }
}
