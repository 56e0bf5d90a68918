//! Configuration and request types for dice search

use crate::dice::{DiceState, ExpectedValues};
use crate::error::InputError;
use crate::validation::{validate_die_sizes, validate_mean, validate_std_dev};
use serde::Serialize;
use std::time::Duration;

/// Number of matches kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 5;

/// Upper bound on expanded states when no bound is configured
pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

/// Moments the search tries to approach
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Target {
    pub mean: f64,
    /// When absent, the standard deviation plays no part in the distance
    pub std_dev: Option<f64>,
}

impl Target {
    pub fn new(mean: f64, std_dev: Option<f64>) -> Self {
        Self { mean, std_dev }
    }

    /// `|mean - target mean| + |std_dev - target std_dev|`
    pub fn distance(&self, state: &DiceState) -> f64 {
        let mut distance = (state.mean() - self.mean).abs();
        if let Some(std_dev) = self.std_dev {
            distance += (state.std_dev() - std_dev).abs();
        }
        distance
    }

    /// True while adding dice could still move `state` toward the target
    pub fn undershoots(&self, state: &DiceState) -> bool {
        state.mean() < self.mean || self.std_dev.is_some_and(|s| state.std_dev() < s)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.std_dev {
            Some(std_dev) => write!(f, "mean {}, std_dev {}", self.mean, std_dev),
            None => write!(f, "mean {}", self.mean),
        }
    }
}

/// A validated search request: a target and a non-empty set of positive dice
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub target: Target,
    pub dice: ExpectedValues,
}

impl SearchRequest {
    pub fn new(mean: f64, std_dev: Option<f64>, dice: &[u32]) -> Result<Self, InputError> {
        let mean = validate_mean(mean)?;
        let std_dev = validate_std_dev(std_dev)?;
        validate_die_sizes(dice)?;
        Ok(Self {
            target: Target::new(mean, std_dev),
            dice: ExpectedValues::from_dice(dice),
        })
    }
}

/// Search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of best matches to keep
    pub capacity: usize,
    /// Stop after this many states have been expanded (None = unbounded)
    pub max_expansions: Option<u64>,
    /// Overall timeout for the search
    pub timeout: Option<Duration>,
    /// Verbose output during search
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
            timeout: None,
            verbose: false,
        }
    }
}

impl SearchConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
