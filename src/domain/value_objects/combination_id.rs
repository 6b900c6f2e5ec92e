//! Combination identifier value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a saved combination.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CombinationId(u64);

impl CombinationId {
    /// Largest id a store hands out. Every issued id has a successor.
    pub const MAX: u64 = u64::MAX - 1;

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` once [`Self::MAX`] is reached.
    pub fn checked_next(self) -> Option<Self> {
        self.0
            .checked_add(1)
            .filter(|&next| next <= Self::MAX)
            .map(Self)
    }
}

impl From<u64> for CombinationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CombinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CombinationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}
