//! Problem search abstraction.
//!
//! This module provides a `ProblemSearcher` trait over a paged,
//! query-string driven problem corpus, a builder for the query grammar,
//! and the solved.ac backend.

mod query;
mod solvedac;
mod types;

pub use query::{QueryBuilder, QueryClause};
pub use solvedac::SolvedAcSearcher;
pub use types::*;
