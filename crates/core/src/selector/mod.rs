//! Daily problem selection.
//!
//! Samples tag/tier filtered searches until a quota of problems that no
//! tracked solver has solved is filled or the attempt budget runs out.

mod config;
mod picker;
mod pool;
mod types;

pub use config::SelectorConfig;
pub use picker::ProblemSelector;
pub use pool::{Band, BandLevels, CandidatePoolEntry, TierBand};
pub use types::{SelectedProblem, Selection, SelectionStatus};
