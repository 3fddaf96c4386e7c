//! Types produced by the selector.

use serde::{Deserialize, Serialize};

/// A problem picked for today's batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedProblem {
    /// Problem id, stringified.
    pub id: String,
    pub title: String,
    /// Tier label of the problem itself, not of the band that found it.
    pub tier: String,
    /// Upper-cased tag of the pool entry that found it.
    pub tag: String,
}

/// How full a selection ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    /// The quota was filled.
    Complete,
    /// The attempt budget ran out with some problems found.
    Partial,
    /// The attempt budget ran out with nothing found.
    Empty,
}

/// Outcome of one selection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// Picked problems in publish order.
    pub problems: Vec<SelectedProblem>,
    /// Sampling attempts used.
    pub attempts: u32,
    /// Quota the run aimed for.
    pub quota: usize,
}

impl Selection {
    pub fn status(&self) -> SelectionStatus {
        if self.problems.is_empty() {
            SelectionStatus::Empty
        } else if self.problems.len() >= self.quota {
            SelectionStatus::Complete
        } else {
            SelectionStatus::Partial
        }
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(id: &str) -> SelectedProblem {
        SelectedProblem {
            id: id.to_string(),
            title: format!("Problem {}", id),
            tier: "G5".to_string(),
            tag: "DP".to_string(),
        }
    }

    #[test]
    fn test_selection_status() {
        let mut selection = Selection {
            problems: vec![],
            attempts: 15,
            quota: 2,
        };
        assert_eq!(selection.status(), SelectionStatus::Empty);
        assert!(selection.is_empty());

        selection.problems.push(problem("1"));
        assert_eq!(selection.status(), SelectionStatus::Partial);

        selection.problems.push(problem("2"));
        assert_eq!(selection.status(), SelectionStatus::Complete);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_selection_status_serialization() {
        assert_eq!(
            serde_json::to_string(&SelectionStatus::Partial).unwrap(),
            "\"partial\""
        );
    }
}
