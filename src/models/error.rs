//! Errors returned by the ranking engine.

use crate::logic::InvalidScore;
use crate::models::player::PlayerId;
use crate::store::StoreError;

/// Errors that can occur while creating, editing or scoring players.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RankingError {
    /// Malformed or missing input; the message names the offending field.
    Validation(String),
    /// A player with this name already exists.
    NameTaken(String),
    /// No player with this name.
    PlayerNotFound(String),
    /// One or both sides of a match could not be found (names listed).
    PlayersNotFound(Vec<String>),
    /// No player with this id.
    IdNotFound(PlayerId),
    /// The id is not a well-formed player id.
    InvalidId(String),
    /// The set score is not a legal best-of-five result.
    InvalidScore(InvalidScore),
    /// The record store failed.
    Persistence(StoreError),
}

impl std::fmt::Display for RankingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingError::Validation(msg) => write!(f, "{}", msg),
            RankingError::NameTaken(name) => write!(f, "Player \"{}\" already exists", name),
            RankingError::PlayerNotFound(name) => write!(f, "Player \"{}\" not found", name),
            RankingError::PlayersNotFound(names) => {
                write!(f, "Player(s) not found: {}. Check the spelling of the names", names.join(", "))
            }
            RankingError::IdNotFound(id) => write!(f, "No player with id {}", id),
            RankingError::InvalidId(raw) => write!(f, "Invalid player id \"{}\"", raw),
            RankingError::InvalidScore(e) => write!(f, "{}", e),
            RankingError::Persistence(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for RankingError {}

impl From<StoreError> for RankingError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NameTaken(name) => RankingError::NameTaken(name),
            other => RankingError::Persistence(other),
        }
    }
}

impl From<InvalidScore> for RankingError {
    fn from(e: InvalidScore) -> Self {
        RankingError::InvalidScore(e)
    }
}
