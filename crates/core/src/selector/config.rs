//! Selector configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the problem selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Problems to pick per run.
    #[serde(default = "default_quota")]
    pub quota: usize,

    /// Sampling attempts before giving up with whatever was found.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Optional JSON file of extra pool entries (`{"selectedPool": [...]}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_file: Option<PathBuf>,
}

fn default_quota() -> usize {
    5
}

fn default_max_attempts() -> u32 {
    15
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            quota: default_quota(),
            max_attempts: default_max_attempts(),
            pool_file: None,
        }
    }
}
