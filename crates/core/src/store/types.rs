//! Types for the solved-problem store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::searcher::ProblemItem;
use crate::tier;

/// Why a problem is in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemStatus {
    /// Solved by a tracked study member.
    SolvedByMember,
}

impl ProblemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemStatus::SolvedByMember => "SOLVED_BY_MEMBER",
        }
    }

    /// Parse a stored status string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SOLVED_BY_MEMBER" => Some(ProblemStatus::SolvedByMember),
            _ => None,
        }
    }
}

/// A persisted solved problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedProblemRecord {
    /// Problem id, stringified.
    pub problem_id: String,
    pub title: String,
    /// Tier label, e.g. "G4".
    pub tier: String,
    /// Handle of the solver this record was synced for.
    pub owner: String,
    pub status: ProblemStatus,
    /// When the record was last written.
    pub synced_at: DateTime<Utc>,
}

impl SolvedProblemRecord {
    /// Build a record for a problem solved by `owner`.
    pub fn from_item(item: &ProblemItem, owner: &str, synced_at: DateTime<Utc>) -> Self {
        Self {
            problem_id: item.key(),
            title: item.title.clone(),
            tier: tier::display_label(item.level),
            owner: owner.to_string(),
            status: ProblemStatus::SolvedByMember,
            synced_at,
        }
    }
}
