//! Counting and ranking of flair labels.

use counter::Counter;
use std::collections::HashMap;
use std::vec::IntoIter;

/// A pair of flair label and occurrence count.
pub type LabelCount = (String, usize);

/// Counts occurrences of flair labels and ranks them by frequency.
///
/// Ranking is stable: labels with equal counts keep the order in which they
/// were first counted, and ranking an unmodified counter twice yields the
/// same sequence both times.
#[derive(Debug, Default)]
pub struct FlairCounter {
    counts: Counter<String>,
    // Counter's hash map forgets insertion order, so first-seen ranks are
    // tracked separately for the tie-break.
    order: Vec<String>,
}

impl FlairCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `label`.
    pub fn increment(&mut self, label: &str) {
        if !self.counts.contains_key(label) {
            self.order.push(label.to_string());
        }
        self.counts[&label.to_string()] += 1;
    }

    /// The number of occurrences recorded for `label`, zero if never seen.
    pub fn get(&self, label: &str) -> usize {
        self.counts[&label.to_string()]
    }

    /// The number of distinct labels seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no labels have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Sorts the labels by descending count, breaking ties by the order in
    /// which labels were first counted.
    ///
    /// Returns an iterator over the (label, count) pairs.
    pub fn ranked(&self) -> IntoIter<LabelCount> {
        let first_seen: HashMap<&str, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(rank, label)| (label.as_str(), rank))
            .collect();
        self.counts
            .most_common_tiebreaker(|lhs, rhs| {
                Ord::cmp(&first_seen[lhs.as_str()], &first_seen[rhs.as_str()])
            })
            .into_iter()
    }
}
