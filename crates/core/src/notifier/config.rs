//! Notifier configuration.

use serde::{Deserialize, Serialize};

/// Notification channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Discord webhook URL. Without one, selections are only logged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Display name of the posting bot.
    #[serde(default = "default_username")]
    pub username: String,
    /// Problem page prefix; the problem id is appended.
    #[serde(default = "default_problem_base_url")]
    pub problem_base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_username() -> String {
    "Daily Baekjoon".to_string()
}

fn default_problem_base_url() -> String {
    "https://www.acmicpc.net/problem".to_string()
}

fn default_timeout() -> u32 {
    30
}

impl NotifierConfig {
    /// The webhook URL, if one is set and non-empty.
    pub fn webhook(&self) -> Option<&str> {
        self.webhook_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            username: default_username(),
            problem_base_url: default_problem_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}
