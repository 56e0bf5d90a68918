//! Moments of a single uniform die and the expected-value table

use std::collections::HashMap;

/// Expected value of a die uniform over `1..=size`
pub fn expected_value(size: u32) -> f64 {
    (size as f64 / 2.0) + 0.5
}

/// Variance of a die uniform over `1..=size`
pub fn variance(size: u32) -> f64 {
    let n = size as f64;
    (n * n - 1.0) / 12.0
}

/// Standard deviation of a single die
pub fn std_dev(size: u32) -> f64 {
    variance(size).sqrt()
}

/// Pre-computed expected values for an allowed die set.
///
/// Duplicate sizes collapse to one entry. Iteration follows the order in
/// which each size first appeared, which is also the order successors are
/// generated in during search.
#[derive(Debug, Clone, Default)]
pub struct ExpectedValues {
    order: Vec<u32>,
    values: HashMap<u32, f64>,
}

impl ExpectedValues {
    pub fn from_dice(dice: &[u32]) -> Self {
        let mut table = Self::default();
        for &die in dice {
            if !table.values.contains_key(&die) {
                table.order.push(die);
                table.values.insert(die, expected_value(die));
            }
        }
        table
    }

    /// Expected value for `die`, computed directly if it is not in the table
    pub fn get(&self, die: u32) -> f64 {
        self.values
            .get(&die)
            .copied()
            .unwrap_or_else(|| expected_value(die))
    }

    /// Allowed die sizes in first-occurrence order
    pub fn dice(&self) -> &[u32] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.order.iter().map(move |&die| (die, self.values[&die]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl std::fmt::Display for ExpectedValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(die, ev)| format!("d{}: {}", die, ev))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
