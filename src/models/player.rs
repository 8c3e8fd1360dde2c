//! Player record and the inputs used to create or edit one.

use crate::logic::classify;
use crate::models::rank::Rank;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (assigned at creation, never changes).
pub type PlayerId = Uuid;

/// Points a new player starts with when none are given.
pub const DEFAULT_POINTS: i64 = 40;

/// A ranked player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Trimmed, unique (case-sensitive).
    pub name: String,
    pub total_points: i64,
    /// Always `classify(total_points)`; only changed through `set_points`.
    pub rank: Rank,
    #[serde(default)]
    pub phone_number: String,
}

impl Player {
    /// Create a new player with a fresh id. Rank is derived from `total_points`.
    pub fn new(name: impl Into<String>, total_points: i64, phone_number: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            total_points,
            rank: classify(total_points),
            phone_number: phone_number.into(),
        }
    }

    /// Replace the point total and reclassify.
    pub fn set_points(&mut self, total_points: i64) {
        self.total_points = total_points;
        self.rank = classify(total_points);
    }

    /// Add a (possibly negative) match delta and reclassify.
    pub fn apply_delta(&mut self, delta: i64) {
        self.set_points(self.total_points.saturating_add(delta));
    }
}

/// Body of a player-creation request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    /// Defaults to `DEFAULT_POINTS` when omitted.
    #[serde(default)]
    pub total_points: Option<i64>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Partial edit of a player's details. Absent fields stay unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlayerPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_points: Option<i64>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl PlayerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.total_points.is_none() && self.phone_number.is_none()
    }
}
