//! Search result types and statistics

use crate::search::config::Target;
use crate::search::leaderboard::Match;
use serde::Serialize;
use std::time::Duration;

/// Why the search loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// The frontier emptied; every admitted state was explored
    #[default]
    Exhausted,
    /// The configured expansion bound was reached with states still queued
    ExpansionLimit,
    /// The configured timeout elapsed with states still queued
    Timeout,
}

impl Termination {
    pub fn is_exhaustive(&self) -> bool {
        matches!(self, Termination::Exhausted)
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Exhausted => write!(f, "exhausted"),
            Termination::ExpansionLimit => write!(f, "expansion limit"),
            Termination::Timeout => write!(f, "timeout"),
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub target: Target,
    /// Best matches, ordered by (distance, dice_count)
    pub matches: Vec<Match>,
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn new(target: Target, matches: Vec<Match>, statistics: SearchStatistics) -> Self {
        Self {
            target,
            matches,
            statistics,
        }
    }

    pub fn best(&self) -> Option<&Match> {
        self.matches.first()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStatistics {
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// States taken off the frontier and scored
    pub states_expanded: u64,
    /// Successor states generated and scored
    pub candidates_evaluated: u64,
    /// Successors enqueued for later expansion
    pub candidates_admitted: u64,
    /// Successors turned away by the admission rule
    pub candidates_pruned: u64,
    /// Admitted successors already in the visited set
    pub duplicates_skipped: u64,
    /// Times an expanded state entered the leaderboard
    pub leaderboard_updates: u64,
    /// Largest frontier size observed
    pub peak_frontier: usize,
    /// Distinct multisets seen, including the empty one
    pub visited_states: usize,
    /// Why the search stopped
    pub termination: Termination,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of evaluated successors that were admitted (0.0 to 1.0)
    pub fn admission_rate(&self) -> f64 {
        if self.candidates_evaluated == 0 {
            0.0
        } else {
            self.candidates_admitted as f64 / self.candidates_evaluated as f64
        }
    }

    /// Get states expanded per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.states_expanded as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("States expanded: {}\n", self.states_expanded));
        s.push_str(&format!(
            "Throughput: {:.0} states/sec\n",
            self.throughput()
        ));
        s.push_str(&format!(
            "Candidates evaluated: {}\n",
            self.candidates_evaluated
        ));
        s.push_str(&format!(
            "Admission rate: {:.2}%\n",
            self.admission_rate() * 100.0
        ));
        s.push_str(&format!(
            "Duplicates skipped: {}\n",
            self.duplicates_skipped
        ));
        s.push_str(&format!(
            "Leaderboard updates: {}\n",
            self.leaderboard_updates
        ));
        s.push_str(&format!("Peak frontier: {}\n", self.peak_frontier));
        s.push_str(&format!("Visited states: {}\n", self.visited_states));
        s.push_str(&format!("Termination: {}\n", self.termination));
        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.matches.is_empty() {
            return writeln!(f, "No matches found.");
        }
        writeln!(f, "Top {} Matches:", self.matches.len())?;
        for (i, m) in self.matches.iter().enumerate() {
            writeln!(f, "Match {}: {}", i + 1, m)?;
        }
        Ok(())
    }
}
