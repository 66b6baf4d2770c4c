//! Parsing of the user's answers at each prompt.

use alloy::primitives::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalances,
    Transfer,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::CheckBalances),
            "2" => Some(Self::Transfer),
            _ => None,
        }
    }
}

/// Only `y` (any case, surrounding whitespace ignored) continues the loop.
pub fn wants_another(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Parse a destination address, `None` for empty or malformed input.
pub fn parse_destination(input: &str) -> Option<Address> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
