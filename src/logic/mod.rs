//! Ranking business logic: scoring, classification, match updates, roster edits.

mod match_update;
mod rank;
mod roster;
mod scoring;

pub use match_update::{apply_match, MatchUpdate, PlayerUpdate};
pub use rank::{classify, BASE_POINT, MAX_POINTS_FOR_TOP_TIER, POINT_STEP};
pub use roster::{
    create_player, delete_player_by_name, get_player_by_id, list_rankings, update_player_details,
};
pub use scoring::{evaluate, InvalidScore, PointDelta, GAMES_TO_WIN, SCORE_TABLE};
