//! Fixed-capacity ranking of the best matches found so far

use crate::dice::DiceState;
use serde::Serialize;
use std::fmt;

/// A scored dice state
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub distance: f64,
    pub dice_count: u32,
    pub state: DiceState,
}

impl Match {
    pub fn new(distance: f64, state: DiceState) -> Self {
        Self {
            distance,
            dice_count: state.dice_count(),
            state,
        }
    }

    /// Whether `self` ranks at or before `other` on (distance, dice_count)
    fn ranks_at_or_before(&self, other: &Match) -> bool {
        self.distance < other.distance
            || (self.distance == other.distance && self.dice_count <= other.dice_count)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (mean={:.2}, std_dev={:.2}), Distance={:.2}, Num Dice={}",
            self.state,
            self.state.mean(),
            self.state.std_dev(),
            self.distance,
            self.dice_count
        )
    }
}

/// Best `capacity` matches ordered by (distance, dice_count), fewer dice
/// first among equal distances.
///
/// Kept as a small sorted vector: inserts go at the upper bound of the new
/// key, so earlier entries win ties, and the tail is dropped past capacity.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    capacity: usize,
    entries: Vec<Match>,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Distance of the lowest-ranked entry
    pub fn worst_distance(&self) -> Option<f64> {
        self.entries.last().map(|m| m.distance)
    }

    /// A match at `distance` would be kept: there is room, or it beats the
    /// current worst entry strictly
    pub fn accepts(&self, distance: f64) -> bool {
        !self.is_full() || self.worst_distance().is_some_and(|worst| distance < worst)
    }

    /// Insert `candidate` if it qualifies; returns whether it was kept
    pub fn offer(&mut self, candidate: Match) -> bool {
        if !self.accepts(candidate.distance) {
            return false;
        }
        let index = self
            .entries
            .partition_point(|entry| entry.ranks_at_or_before(&candidate));
        self.entries.insert(index, candidate);
        self.entries.truncate(self.capacity);
        true
    }

    pub fn entries(&self) -> &[Match] {
        &self.entries
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.entries
    }
}
