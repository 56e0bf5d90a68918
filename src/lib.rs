//! dicefit: find dice combinations whose sum approximates a target mean
//! and, optionally, a target standard deviation.
//!
//! Only the first two moments are modeled. Dice are independent and uniform
//! on `1..=N`, so means and variances add.

pub mod dice;
pub mod error;
pub mod parser;
pub mod search;
pub mod validation;

pub use dice::{DiceCounts, DiceState, ExpectedValues};
pub use error::InputError;
pub use search::{
    BreadthFirstSearch, Match, SearchAlgorithm, SearchConfig, SearchRequest, SearchResult,
    SearchStatistics, Target, find_optimal,
};
