//! Rank tiers, lowest to highest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill bracket derived from a player's cumulative points.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    #[default]
    E,
    D2,
    D1,
    C2,
    C1,
    B2,
    B1,
    A2,
    A1,
    A0,
}

impl Rank {
    /// All tiers in ascending order (index 0 = lowest).
    pub const TIERS: [Rank; 10] = [
        Rank::E,
        Rank::D2,
        Rank::D1,
        Rank::C2,
        Rank::C1,
        Rank::B2,
        Rank::B1,
        Rank::A2,
        Rank::A1,
        Rank::A0,
    ];

    pub fn lowest() -> Self {
        Self::TIERS[0]
    }

    pub fn highest() -> Self {
        Self::TIERS[Self::TIERS.len() - 1]
    }

    /// Label as shown in the rankings table.
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D2 => "D2",
            Rank::D1 => "D1",
            Rank::C2 => "C2",
            Rank::C1 => "C1",
            Rank::B2 => "B2",
            Rank::B1 => "B1",
            Rank::A2 => "A2",
            Rank::A1 => "A1",
            Rank::A0 => "A0",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
