//! Builder for the search query grammar.
//!
//! Clauses are space-separated:
//! `tag:<tag>`, `tier:<min>..<max>`, `s#<n>..`, `s@<handle>`, `!s@<handle>`.

use std::fmt;

use crate::tier::TierRank;

/// A single clause of a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryClause {
    /// Problems carrying an algorithm tag.
    Tag(String),
    /// Problems whose level lies in `min..=max`.
    TierRange { min: TierRank, max: TierRank },
    /// Problems solved by at least this many users.
    MinSolvers(u32),
    /// Problems solved by a handle.
    SolvedBy(String),
    /// Problems not solved by a handle.
    NotSolvedBy(String),
}

impl fmt::Display for QueryClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryClause::Tag(tag) => write!(f, "tag:{}", tag),
            QueryClause::TierRange { min, max } => write!(f, "tier:{}..{}", min, max),
            QueryClause::MinSolvers(n) => write!(f, "s#{}..", n),
            QueryClause::SolvedBy(handle) => write!(f, "s@{}", handle),
            QueryClause::NotSolvedBy(handle) => write!(f, "!s@{}", handle),
        }
    }
}

/// Accumulates clauses in insertion order.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    clauses: Vec<QueryClause>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.clauses.push(QueryClause::Tag(tag.into()));
        self
    }

    pub fn tier_range(mut self, min: TierRank, max: TierRank) -> Self {
        self.clauses.push(QueryClause::TierRange { min, max });
        self
    }

    pub fn min_solvers(mut self, n: u32) -> Self {
        self.clauses.push(QueryClause::MinSolvers(n));
        self
    }

    pub fn solved_by(mut self, handle: impl Into<String>) -> Self {
        self.clauses.push(QueryClause::SolvedBy(handle.into()));
        self
    }

    pub fn not_solved_by<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clauses
            .extend(handles.into_iter().map(|h| QueryClause::NotSolvedBy(h.into())));
        self
    }

    pub fn clauses(&self) -> &[QueryClause] {
        &self.clauses
    }

    /// Render the query string (not URL-encoded).
    pub fn build(&self) -> String {
        self.clauses
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
