//! Mock notifier for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::notifier::{Notifier, NotifyError};
use crate::selector::SelectedProblem;

/// Mock implementation of [`Notifier`] that records deliveries.
#[derive(Debug, Default, Clone)]
pub struct MockNotifier {
    deliveries: Arc<RwLock<Vec<Vec<SelectedProblem>>>>,
    /// When set, every delivery fails with this status.
    fail_status: Arc<RwLock<Option<u16>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make deliveries fail as if the channel answered with `status`.
    pub async fn fail_with(&self, status: u16) {
        *self.fail_status.write().await = Some(status);
    }

    /// Every batch delivered (or attempted), in order.
    pub async fn deliveries(&self) -> Vec<Vec<SelectedProblem>> {
        self.deliveries.read().await.clone()
    }

    pub async fn delivery_count(&self) -> usize {
        self.deliveries.read().await.len()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn notify(&self, problems: &[SelectedProblem]) -> Result<(), NotifyError> {
        self.deliveries.write().await.push(problems.to_vec());

        if let Some(status) = *self.fail_status.read().await {
            return Err(NotifyError::Rejected {
                status,
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}
