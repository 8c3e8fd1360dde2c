//! Data structures for the ranking ladder: players, rank tiers, errors.

mod error;
mod player;
mod rank;

pub use error::RankingError;
pub use player::{NewPlayer, Player, PlayerId, PlayerPatch, DEFAULT_POINTS};
pub use rank::Rank;
