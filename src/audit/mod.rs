//! Append-only audit log of tracker operations
//!
//! Every successful operation leaves one timestamped line, e.g.
//!
//! ```text
//! 2024-03-01 18:05:12 - Added appliance: Light | Desk Lamp | 60 W
//! ```
//!
//! Writing is best-effort by contract: a failure here is reported through
//! the log facade and never surfaces to the operation being recorded.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Timestamp layout used for every audit line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stand-in when the current time cannot be rendered
const FALLBACK_TIMESTAMP: &str = "unknown-time";

/// Audit trail backed by an append-only text file
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Create a log over the given file path. The file is created on the
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line. A write problem is swallowed so it
    /// cannot block the operation being recorded.
    pub fn append(&self, message: &str) {
        if let Err(err) = self.try_append(message) {
            log::debug!("Failed to write audit log entry: {}", err);
        }
    }

    fn try_append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} - {}", timestamp(), message)
    }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`, or the fallback marker if
/// the clock cannot be rendered.
fn timestamp() -> String {
    let mut out = String::new();
    match write!(out, "{}", Local::now().format(TIMESTAMP_FORMAT)) {
        Ok(()) => out,
        Err(_) => FALLBACK_TIMESTAMP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_writes_timestamped_line() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::new(dir.path().join("operations.txt"));

        audit.append("Added appliance: Light | Lamp | 60 W");

        let content = fs::read_to_string(audit.path()).unwrap();
        let line = content.lines().next().unwrap();
        let (stamp, message) = line.split_once(" - ").unwrap();

        assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(message, "Added appliance: Light | Lamp | 60 W");
    }

    #[test]
    fn test_append_is_append_only() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::new(dir.path().join("operations.txt"));

        audit.append("first");
        audit.append("second");

        let content = fs::read_to_string(audit.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn test_append_creates_file_on_first_use() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::new(dir.path().join("operations.txt"));

        assert!(!audit.path().exists());
        audit.append("hello");
        assert!(audit.path().exists());
    }

    #[test]
    fn test_append_swallows_write_failures() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending; the call must still
        // return without panicking.
        let audit = AuditLog::new(dir.path());

        audit.append("goes nowhere");
    }

    #[test]
    fn test_timestamp_matches_declared_format() {
        let stamp = timestamp();
        assert!(NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
