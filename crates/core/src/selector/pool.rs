//! Candidate pool entries: the sampling rules the selector draws from.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tier::{self, TierRank};

/// One sampling rule: a tag, two difficulty bands and a popularity floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePoolEntry {
    /// Algorithm tag as understood by the search backend (e.g. "dp").
    pub tag: String,
    pub level: BandLevels,
    /// Minimum number of users who solved the problem.
    pub min_participants: u32,
}

impl CandidatePoolEntry {
    pub fn band(&self, band: Band) -> &TierBand {
        match band {
            Band::Low => &self.level.low,
            Band::High => &self.level.high,
        }
    }

    /// Every tier label this entry references.
    pub fn tier_labels(&self) -> [&str; 4] {
        [
            self.level.low.min.as_str(),
            self.level.low.max.as_str(),
            self.level.high.min.as_str(),
            self.level.high.max.as_str(),
        ]
    }
}

/// The low and high difficulty bands of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandLevels {
    pub low: TierBand,
    pub high: TierBand,
}

/// Inclusive tier range given as labels, e.g. `B5..B1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    pub min: String,
    pub max: String,
}

impl TierBand {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Resolve both ends to ranks. Unknown labels resolve to 0.
    pub fn ranks(&self) -> (TierRank, TierRank) {
        (tier::rank_of(&self.min), tier::rank_of(&self.max))
    }
}

/// Which band of an entry to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    High,
}

impl Band {
    /// Pick a band with equal probability.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Band::High
        } else {
            Band::Low
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Low => write!(f, "low"),
            Band::High => write!(f, "high"),
        }
    }
}
