//! Difficulty tier scale.
//!
//! solved.ac reports a problem's difficulty as a `level` number; the same
//! number is what `tier:<min>..<max>` clauses expect. This module maps the
//! human-readable labels used in configuration ("B5", "G1", ...) onto that
//! ordinal scale.

/// Tier labels in ascending difficulty. A label's index is its rank.
pub const TIER_LABELS: [&str; 21] = [
    "UR", "B5", "B4", "B3", "B2", "B1", "S5", "S4", "S3", "S2", "S1", "G5", "G4", "G3", "G2",
    "G1", "P5", "P4", "P3", "P2", "P1",
];

/// Ordinal rank of a tier label. `0` is unrated.
pub type TierRank = u8;

/// Resolve a tier label to its rank, ignoring ASCII case.
///
/// Unknown labels resolve to `0` (unrated) instead of failing, so callers
/// that need to reject bad input must check [`is_known`] themselves.
pub fn rank_of(label: &str) -> TierRank {
    TIER_LABELS
        .iter()
        .position(|l| l.eq_ignore_ascii_case(label))
        .map(|i| i as TierRank)
        .unwrap_or(0)
}

/// Label for a rank, if the rank is on the scale.
pub fn label_of(rank: TierRank) -> Option<&'static str> {
    TIER_LABELS.get(rank as usize).copied()
}

/// Label for a reported level; levels past the scale keep their number
/// (`L25`).
pub fn display_label(rank: TierRank) -> String {
    label_of(rank)
        .map(str::to_string)
        .unwrap_or_else(|| format!("L{}", rank))
}

/// Whether `label` names a tier on the scale.
pub fn is_known(label: &str) -> bool {
    TIER_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_of_is_order_preserving() {
        let ranks: Vec<TierRank> = TIER_LABELS.iter().map(|l| rank_of(l)).collect();
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1], "{:?} not ascending", pair);
        }
    }

    #[test]
    fn test_rank_of_is_injective() {
        let ranks: HashSet<TierRank> = TIER_LABELS.iter().map(|l| rank_of(l)).collect();
        assert_eq!(ranks.len(), TIER_LABELS.len());
    }

    #[test]
    fn test_rank_of_known_labels() {
        assert_eq!(rank_of("UR"), 0);
        assert_eq!(rank_of("B5"), 1);
        assert_eq!(rank_of("B1"), 5);
        assert_eq!(rank_of("S5"), 6);
        assert_eq!(rank_of("G5"), 11);
        assert_eq!(rank_of("G1"), 15);
        assert_eq!(rank_of("P1"), 20);
    }

    #[test]
    fn test_rank_of_case_insensitive() {
        assert_eq!(rank_of("g3"), rank_of("G3"));
        assert_eq!(rank_of("p5"), 16);
        assert_eq!(rank_of("s2"), 9);
    }

    #[test]
    fn test_rank_of_unknown_is_zero() {
        assert_eq!(rank_of(""), 0);
        assert_eq!(rank_of("D5"), 0);
        assert_eq!(rank_of("gold"), 0);
        assert_eq!(rank_of("B6"), 0);
        assert_eq!(rank_of(" s2 "), 0);
    }

    #[test]
    fn test_label_of_round_trip() {
        for (i, label) in TIER_LABELS.iter().enumerate() {
            assert_eq!(label_of(i as TierRank), Some(*label));
        }
        assert_eq!(label_of(21), None);
        assert_eq!(label_of(255), None);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label(0), "UR");
        assert_eq!(display_label(20), "P1");
        assert_eq!(display_label(25), "L25");
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("b3"));
        assert!(is_known("UR"));
        assert!(!is_known("R1"));
        assert!(!is_known(" G1"));
    }
}
