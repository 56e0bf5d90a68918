//! Dice moments and dice-multiset state

pub mod moments;
pub mod state;

pub use moments::{ExpectedValues, expected_value, std_dev, variance};
pub use state::{DiceCounts, DiceState};
