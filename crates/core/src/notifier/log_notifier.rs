//! Log-only notifier, used when no webhook is configured.

use async_trait::async_trait;
use tracing::info;

use crate::selector::SelectedProblem;

use super::{Notifier, NotifyError};

/// Writes the selection to the log instead of a channel.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    async fn notify(&self, problems: &[SelectedProblem]) -> Result<(), NotifyError> {
        for (idx, p) in problems.iter().enumerate() {
            info!(
                position = idx + 1,
                problem_id = %p.id,
                title = %p.title,
                tier = %p.tier,
                tag = %p.tag,
                "Selected problem"
            );
        }
        Ok(())
    }
}
