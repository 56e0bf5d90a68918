//! Distance-ranked breadth-first search over dice multisets
//!
//! The state space is the lattice of dice counts reachable from the empty
//! multiset by adding one die at a time. The search:
//! 1. Starts from the empty multiset
//! 2. Dequeues states in FIFO order (non-decreasing dice count)
//! 3. Offers each dequeued state to a bounded leaderboard
//! 4. Generates one successor per allowed die and enqueues it only if it
//!    passes the admission rule and has not been visited
//! 5. Stops when the frontier empties or a configured bound is hit

use crate::dice::{DiceCounts, DiceState, ExpectedValues};
use crate::search::config::{SearchConfig, Target};
use crate::search::leaderboard::{Leaderboard, Match};
use crate::search::result::{SearchResult, SearchStatistics, Termination};
use crate::search::SearchAlgorithm;
use std::collections::{HashSet, VecDeque};
use std::time::Instant;

/// Breadth-first search with top-K retention and over-shoot pruning
pub struct BreadthFirstSearch {
    statistics: SearchStatistics,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(),
        }
    }

    /// Admission rule for a successor at `distance`.
    ///
    /// The leaderboard must have room or the successor must beat its worst
    /// entry. On top of that the successor must either still undershoot the
    /// target or sit within the current worst distance.
    fn admits(
        target: &Target,
        leaderboard: &Leaderboard,
        state: &DiceState,
        distance: f64,
    ) -> bool {
        if !leaderboard.accepts(distance) {
            return false;
        }
        target.undershoots(state)
            || leaderboard
                .worst_distance()
                .is_none_or(|worst| distance <= worst)
    }
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for BreadthFirstSearch {
    fn search(
        &mut self,
        target: &Target,
        dice: &ExpectedValues,
        config: &SearchConfig,
    ) -> SearchResult {
        self.reset();
        let start_time = Instant::now();

        log::info!(
            "searching {} over {} die sizes (capacity {})",
            target,
            dice.len(),
            config.capacity
        );

        let mut leaderboard = Leaderboard::new(config.capacity);
        let mut frontier: VecDeque<DiceState> = VecDeque::new();
        let mut visited: HashSet<DiceCounts> = HashSet::new();

        let initial = DiceState::empty();
        visited.insert(initial.counts().clone());
        frontier.push_back(initial);
        self.statistics.peak_frontier = 1;

        while let Some(current) = frontier.pop_front() {
            if let Some(max) = config.max_expansions {
                if self.statistics.states_expanded >= max {
                    // Put it back so the reported frontier is accurate
                    frontier.push_front(current);
                    self.statistics.termination = Termination::ExpansionLimit;
                    break;
                }
            }
            if let Some(timeout) = config.timeout {
                if start_time.elapsed() >= timeout {
                    frontier.push_front(current);
                    self.statistics.termination = Termination::Timeout;
                    break;
                }
            }

            self.statistics.states_expanded += 1;

            let distance = target.distance(&current);
            let expanded = self.statistics.states_expanded;
            if leaderboard.offer(Match::new(distance, current.clone())) {
                self.statistics.leaderboard_updates += 1;
                log::debug!(
                    "state {} entered leaderboard at distance {:.4} ({} expanded)",
                    current,
                    distance,
                    expanded
                );
            }

            for &die in dice.dice() {
                let successor = current.with_added(die, dice);
                let successor_distance = target.distance(&successor);
                self.statistics.candidates_evaluated += 1;

                if !Self::admits(target, &leaderboard, &successor, successor_distance) {
                    self.statistics.candidates_pruned += 1;
                    continue;
                }
                if !visited.insert(successor.counts().clone()) {
                    self.statistics.duplicates_skipped += 1;
                    continue;
                }
                self.statistics.candidates_admitted += 1;
                frontier.push_back(successor);
            }

            self.statistics.peak_frontier = self.statistics.peak_frontier.max(frontier.len());

            if config.verbose && expanded % 100_000 == 0 {
                log::info!(
                    "expanded {} states: frontier={}, visited={}, best={:?}",
                    expanded,
                    frontier.len(),
                    visited.len(),
                    leaderboard.entries().first().map(|m| m.distance)
                );
            }
        }

        self.statistics.visited_states = visited.len();
        self.statistics.elapsed_time = start_time.elapsed();

        if !self.statistics.termination.is_exhaustive() {
            log::warn!(
                "search stopped on {} after {} states ({} still queued)",
                self.statistics.termination,
                self.statistics.states_expanded,
                frontier.len()
            );
        }
        log::info!(
            "search finished in {:.2?}: {} states expanded, {} visited",
            self.statistics.elapsed_time,
            self.statistics.states_expanded,
            self.statistics.visited_states
        );

        SearchResult::new(*target, leaderboard.into_matches(), self.statistics.clone())
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new();
    }
}
