//! Boundary checks on search input
//!
//! Everything here runs before the search engine sees a request; the engine
//! itself assumes positive die sizes and finite targets.

use crate::error::InputError;

/// Die sizes must be non-empty and at least 1
pub fn validate_die_sizes(dice: &[u32]) -> Result<(), InputError> {
    if dice.is_empty() {
        return Err(InputError::EmptyDiceSet);
    }
    match dice.iter().find(|&&die| die == 0) {
        Some(&die) => Err(InputError::NonPositiveDie(die as i64)),
        None => Ok(()),
    }
}

pub fn validate_mean(mean: f64) -> Result<f64, InputError> {
    if mean.is_finite() {
        Ok(mean)
    } else {
        Err(InputError::NonFiniteMean(mean))
    }
}

pub fn validate_std_dev(std_dev: Option<f64>) -> Result<Option<f64>, InputError> {
    match std_dev {
        None => Ok(None),
        Some(s) if !s.is_finite() => Err(InputError::NonFiniteStdDev(s)),
        Some(s) if s < 0.0 => Err(InputError::NegativeStdDev(s)),
        Some(s) => Ok(Some(s)),
    }
}
