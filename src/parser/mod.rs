//! Dice-list parser
//!
//! Accepts die sizes written as plain integers (`20`) or in die notation
//! (`d20`, `D20`), separated by commas and/or whitespace, optionally wrapped
//! in square brackets: `[3, 5, 7]`, `d6 d20`, `4,6,8`.

use std::fmt;

/// Parse error with the offending token and its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based index of the offending die in the list (0 for the list itself)
    pub position: usize,
    pub message: String,
    pub token: String,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
            token: token.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.position == 0 {
            write!(f, "{}: '{}'", self.message, self.token)
        } else {
            write!(
                f,
                "item {}: {}: '{}'",
                self.position, self.message, self.token
            )
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a single die size (`6`, `d6`, `D6`)
pub fn parse_die(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let digits = s
        .strip_prefix('d')
        .or_else(|| s.strip_prefix('D'))
        .unwrap_or(s);

    if digits.is_empty() {
        return Err("empty die size".to_string());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("expected a positive integer die size".to_string());
    }

    let size = digits
        .parse::<u32>()
        .map_err(|_| "die size out of range".to_string())?;
    if size == 0 {
        return Err("die size must be at least 1".to_string());
    }
    Ok(size)
}

/// Parse a list of die sizes
pub fn parse_dice_list(input: &str) -> Result<Vec<u32>, ParseError> {
    let trimmed = input.trim();
    let body = match (trimmed.strip_prefix('['), trimmed.strip_suffix(']')) {
        (Some(_), Some(_)) if trimmed.len() >= 2 => &trimmed[1..trimmed.len() - 1],
        (None, None) => trimmed,
        _ => return Err(ParseError::new(0, "unbalanced brackets", trimmed)),
    };

    if body.trim().is_empty() {
        return Err(ParseError::new(0, "no die sizes given", trimmed));
    }

    let mut dice = Vec::new();
    for item in body.split(',') {
        let item = item.trim();
        if item.is_empty() {
            return Err(ParseError::new(dice.len() + 1, "empty item", item));
        }
        for token in item.split_whitespace() {
            let size = parse_die(token)
                .map_err(|msg| ParseError::new(dice.len() + 1, msg, token))?;
            dice.push(size);
        }
    }

    Ok(dice)
}

/// Named die sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DicePreset {
    /// d4, d6, d8, d10, d12, d20, d100
    #[default]
    Standard,
    /// The standard set plus d2
    Polyhedral,
    /// d6 and d20
    Classic,
}

impl DicePreset {
    pub fn dice(&self) -> Vec<u32> {
        match self {
            DicePreset::Standard => vec![4, 6, 8, 10, 12, 20, 100],
            DicePreset::Polyhedral => vec![2, 4, 6, 8, 10, 12, 20, 100],
            DicePreset::Classic => vec![6, 20],
        }
    }
}
