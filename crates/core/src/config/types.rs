use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::notifier::NotifierConfig;
use crate::selector::{CandidatePoolEntry, SelectorConfig};
use crate::sync::SyncConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub solvedac: SolvedAcConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Study members whose solved problems are tracked and excluded.
    #[serde(default)]
    pub solvers: Vec<TrackedSolver>,
    /// Inline sampling rules. Entries from `selector.pool_file` are
    /// appended to these when the config is loaded from disk.
    #[serde(default)]
    pub pool: Vec<CandidatePoolEntry>,
    #[serde(default)]
    pub selector: SelectorConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A study member: display name plus their solved.ac handle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrackedSolver {
    pub name: String,
    pub handle: String,
}

impl TrackedSolver {
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
        }
    }
}

/// solved.ac API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolvedAcConfig {
    /// API root (e.g., "https://solved.ac/api/v3")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SolvedAcConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://solved.ac/api/v3".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("dailyps/{}", env!("CARGO_PKG_VERSION"))
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("dailyps.db")
}

/// Logging output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

/// Sanitized config for log output (webhook URL redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub solvedac: SolvedAcConfig,
    pub database: DatabaseConfig,
    pub solvers: Vec<TrackedSolver>,
    pub pool_entries: usize,
    pub selector: SelectorConfig,
    pub sync: SyncConfig,
    pub notifier: SanitizedNotifierConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedNotifierConfig {
    pub webhook_configured: bool,
    pub username: String,
    pub problem_base_url: String,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            solvedac: config.solvedac.clone(),
            database: config.database.clone(),
            solvers: config.solvers.clone(),
            pool_entries: config.pool.len(),
            selector: config.selector.clone(),
            sync: config.sync.clone(),
            notifier: SanitizedNotifierConfig {
                webhook_configured: config.notifier.webhook().is_some(),
                username: config.notifier.username.clone(),
                problem_base_url: config.notifier.problem_base_url.clone(),
            },
        }
    }
}
