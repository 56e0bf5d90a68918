//! Errors raised while validating search input

use crate::parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("die sizes must be positive, got {0}")]
    NonPositiveDie(i64),
    #[error("at least one die size is required")]
    EmptyDiceSet,
    #[error("target mean must be finite, got {0}")]
    NonFiniteMean(f64),
    #[error("target standard deviation must be finite, got {0}")]
    NonFiniteStdDev(f64),
    #[error("target standard deviation must not be negative, got {0}")]
    NegativeStdDev(f64),
    #[error("invalid dice list: {0}")]
    Parse(#[from] ParseError),
}
