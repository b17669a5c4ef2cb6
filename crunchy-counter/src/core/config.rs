//! Counter configuration
//!
//! # Environment variables
//!
//! All settings can be overridden through environment variables (a `.env`
//! file is honored when present):
//!
//! | Variable  | Default        | Meaning                        |
//! |-----------|----------------|--------------------------------|
//! | WORK_DIR  | ./counter-data | Database directory             |
//! | LOG_LEVEL | info           | tracing filter level           |
//! | LOG_DIR   | (unset)        | Daily-rolling log file dir     |

/// Database file name inside the work directory
pub const DB_FILE: &str = "counter.redb";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the embedded database and other state
    pub work_dir: String,
    /// tracing filter level: trace | debug | info | warn | error
    pub log_level: String,
    /// When set, logs also go to a daily-rolling file in this directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./counter-data".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the work directory, for tests
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Full path of the database file
    pub fn db_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join(DB_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
