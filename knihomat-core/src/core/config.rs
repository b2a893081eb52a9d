//! Application configuration
//!
//! The storage location is injected through the work directory: the
//! embedded database lives under `work_dir/database`, logs under
//! `work_dir/logs`. On mobile platforms the host app passes its
//! per-app data directory; elsewhere the default is relative to the
//! working directory.
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | ./knihomat | Work directory for database and logs |
//! | LOG_LEVEL | info | Tracing filter level |

use std::path::{Path, PathBuf};

/// Core configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database and log files
    pub work_dir: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./knihomat".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Configuration rooted at an injected storage location
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
            log_level: "info".into(),
        }
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("database")
    }

    /// Directory holding rolling log files
    pub fn log_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_hang_off_work_dir() {
        let config = Config::with_work_dir("/tmp/knihomat-test");
        assert_eq!(
            config.database_dir(),
            PathBuf::from("/tmp/knihomat-test/database")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/knihomat-test/logs"));
    }

    #[test]
    fn ensure_creates_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::with_work_dir(tmp.path().to_string_lossy());
        config.ensure_work_dir_structure().unwrap();
        assert!(config.database_dir().is_dir());
        assert!(config.log_dir().is_dir());
    }
}
