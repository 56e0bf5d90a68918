//! Dice multisets and their aggregate moments

use crate::dice::moments::{ExpectedValues, variance};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Counts per die size. Zero counts are never stored.
pub type DiceCounts = BTreeMap<u32, u32>;

/// A multiset of dice combined by summation, with its derived mean and
/// standard deviation.
///
/// Identity is the count mapping alone: equality and hashing ignore the
/// derived floats. Moments are summed in ascending die order, so equal
/// multisets always carry bit-identical moments regardless of how they
/// were built.
#[derive(Debug, Clone, Serialize)]
pub struct DiceState {
    counts: DiceCounts,
    mean: f64,
    std_dev: f64,
}

impl DiceState {
    /// The state with no dice: mean 0, standard deviation 0
    pub fn empty() -> Self {
        Self {
            counts: DiceCounts::new(),
            mean: 0.0,
            std_dev: 0.0,
        }
    }

    pub fn new(counts: DiceCounts, expected: &ExpectedValues) -> Self {
        let counts: DiceCounts = counts.into_iter().filter(|&(_, c)| c > 0).collect();
        let mean = counts
            .iter()
            .fold(0.0_f64, |acc, (&die, &count)| acc + count as f64 * expected.get(die));
        let total_variance = counts
            .iter()
            .fold(0.0_f64, |acc, (&die, &count)| acc + count as f64 * variance(die));
        Self {
            counts,
            mean,
            std_dev: total_variance.sqrt(),
        }
    }

    /// Successor state with one more die of size `die`
    pub fn with_added(&self, die: u32, expected: &ExpectedValues) -> Self {
        let mut counts = self.counts.clone();
        *counts.entry(die).or_insert(0) += 1;
        Self::new(counts, expected)
    }

    pub fn counts(&self) -> &DiceCounts {
        &self.counts
    }

    pub fn count_of(&self, die: u32) -> u32 {
        self.counts.get(&die).copied().unwrap_or(0)
    }

    /// Total number of dice in the multiset
    pub fn dice_count(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for DiceState {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for DiceState {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for DiceState {}

impl Hash for DiceState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.counts.hash(state);
    }
}

/// Renders as `1d6, 2d20`; the empty state renders as `none`
impl fmt::Display for DiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return write!(f, "none");
        }
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|(die, count)| format!("{}d{}", count, die))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
