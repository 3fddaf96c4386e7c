//! Delivery of the day's selection.
//!
//! The core only promises the shape and order of what it hands over; the
//! notifier owns formatting and transport.

mod config;
mod discord;
mod log_notifier;

pub use config::NotifierConfig;
pub use discord::{format_message, kst_today, DiscordNotifier};
pub use log_notifier::LogNotifier;

use async_trait::async_trait;
use thiserror::Error;

use crate::selector::SelectedProblem;

/// Errors that can occur while delivering a selection.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The channel refused the message.
    #[error("Notification rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// Notifier not configured (missing webhook, etc.).
    #[error("Notifier not configured: {0}")]
    NotConfigured(String),
}

/// Trait for notification channels.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &str;

    /// Deliver problems in the given order.
    async fn notify(&self, problems: &[SelectedProblem]) -> Result<(), NotifyError>;
}
