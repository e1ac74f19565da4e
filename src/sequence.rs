//! Ordinal sequence validation.
//!
//! Given every ordinal from one scan (duplicates included), computes which
//! ordinals are duplicated and which are missing from the `[min, max]` span.
//! Gaps are kept as inclusive ranges, so two ordinals far apart cost one
//! range rather than one entry per absent number.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Duplicates and gaps found in one scan's ordinals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SequenceReport {
    /// Ordinals carried by two or more records.
    pub duplicate_ordinals: BTreeSet<u64>,
    /// Disjoint gaps in `[min, max]`, ascending.
    missing_ranges: Vec<RangeInclusive<u64>>,
}

impl SequenceReport {
    /// Analyze a list of ordinals.
    ///
    /// Missing ordinals are computed from the deduplicated set. Empty input
    /// yields an empty report.
    pub fn analyze(ordinals: &[u64]) -> Self {
        let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
        for &ordinal in ordinals {
            *counts.entry(ordinal).or_default() += 1;
        }

        let duplicate_ordinals = counts
            .iter()
            .filter(|(_, &count)| count > 1)
            .map(|(&ordinal, _)| ordinal)
            .collect();

        // BTreeMap keys are the sorted distinct ordinals, so next > prev
        let keys: Vec<u64> = counts.keys().copied().collect();
        let missing_ranges = keys
            .windows(2)
            .filter(|pair| pair[1] - pair[0] > 1)
            .map(|pair| pair[0] + 1..=pair[1] - 1)
            .collect();

        Self {
            duplicate_ordinals,
            missing_ranges,
        }
    }

    /// Whether `ordinal` is excluded from renaming as a duplicate.
    pub fn is_duplicate(&self, ordinal: u64) -> bool {
        self.duplicate_ordinals.contains(&ordinal)
    }

    /// Gaps as inclusive ranges, ascending.
    pub fn missing_ranges(&self) -> &[RangeInclusive<u64>] {
        &self.missing_ranges
    }

    /// Every missing ordinal, ascending. Lazy: the span may be huge.
    pub fn missing_ordinals(&self) -> impl Iterator<Item = u64> + '_ {
        self.missing_ranges.iter().flat_map(|range| range.clone())
    }

    /// Number of missing ordinals.
    pub fn missing_count(&self) -> u64 {
        self.missing_ranges
            .iter()
            .map(|range| range.end() - range.start() + 1)
            .fold(0, u64::saturating_add)
    }

    pub fn has_gaps(&self) -> bool {
        !self.missing_ranges.is_empty()
    }

    /// True when the ordinals were unique and contiguous.
    pub fn is_clean(&self) -> bool {
        self.duplicate_ordinals.is_empty() && self.missing_ranges.is_empty()
    }
}
