//! Search for dice multisets whose moments approach a target
//!
//! - Breadth-first: grows multisets one die at a time, keeps the best
//!   matches on a bounded leaderboard, and prunes successors that overshoot
//!   without beating the current worst match

pub mod bfs;
pub mod config;
pub mod leaderboard;
pub mod result;

pub use bfs::BreadthFirstSearch;
pub use config::{SearchConfig, SearchRequest, Target};
pub use leaderboard::{Leaderboard, Match};
pub use result::{SearchResult, SearchStatistics, Termination};

use crate::dice::ExpectedValues;
use crate::error::InputError;

/// Trait for search algorithms over dice multisets
pub trait SearchAlgorithm {
    /// Search for the multisets closest to `target`
    ///
    /// # Arguments
    /// * `target` - Mean and optional standard deviation to approach
    /// * `dice` - Allowed die sizes with their expected values
    /// * `config` - Search configuration parameters
    ///
    /// # Returns
    /// A SearchResult holding the ranked matches and statistics
    fn search(
        &mut self,
        target: &Target,
        dice: &ExpectedValues,
        config: &SearchConfig,
    ) -> SearchResult;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the search state for a new search
    fn reset(&mut self);
}

/// Run a validated request with the given configuration
pub fn run_search(request: &SearchRequest, config: &SearchConfig) -> SearchResult {
    let mut search = BreadthFirstSearch::new();
    search.search(&request.target, &request.dice, config)
}

/// Find the five dice multisets closest to the target moments.
///
/// Input is validated first; the search itself cannot fail.
pub fn find_optimal(
    target_mean: f64,
    target_std_dev: Option<f64>,
    allowed_dice: &[u32],
) -> Result<Vec<Match>, InputError> {
    let request = SearchRequest::new(target_mean, target_std_dev, allowed_dice)?;
    Ok(run_search(&request, &SearchConfig::default()).into_matches())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_optimal_single_die() {
        let matches = find_optimal(3.5, None, &[6]).unwrap();
        assert_eq!(matches[0].distance, 0.0);
        assert_eq!(matches[0].state.count_of(6), 1);
    }

    #[test]
    fn test_find_optimal_returns_five() {
        let matches = find_optimal(10.5, Some(2.0), &[4, 6, 8, 10, 12, 20, 100]).unwrap();
        assert_eq!(matches.len(), 5);
        assert_eq!(matches[0].state.count_of(4), 4);
    }

    #[test]
    fn test_find_optimal_rejects_bad_input() {
        assert!(matches!(
            find_optimal(3.5, None, &[0]),
            Err(InputError::NonPositiveDie(0))
        ));
        assert!(matches!(
            find_optimal(3.5, None, &[]),
            Err(InputError::EmptyDiceSet)
        ));
        assert!(matches!(
            find_optimal(3.5, Some(f64::INFINITY), &[6]),
            Err(InputError::NonFiniteStdDev(_))
        ));
    }

    #[test]
    fn test_run_search_uses_config() {
        let request = SearchRequest::new(7.0, None, &[6]).unwrap();
        let result = run_search(&request, &SearchConfig::default().with_capacity(1));
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.target, Target::new(7.0, None));
    }
}
