//! Persistent record of problems the tracked solvers have solved.
//!
//! Any record in the store, whatever its owner or status, excludes that
//! problem from future selections.

mod sqlite_store;
mod traits;
mod types;

pub use sqlite_store::SqliteSolvedStore;
pub use traits::{SolvedProblemStore, StoreError, MAX_BATCH_WRITE};
pub use types::{ProblemStatus, SolvedProblemRecord};
