//! Table tennis ranking ladder: library with models, scoring logic and record stores.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use logic::{
    apply_match, classify, create_player, delete_player_by_name, evaluate, get_player_by_id,
    list_rankings, update_player_details, InvalidScore, MatchUpdate, PlayerUpdate, PointDelta,
};
pub use models::{NewPlayer, Player, PlayerId, PlayerPatch, Rank, RankingError, DEFAULT_POINTS};
pub use store::{JsonFileStore, MemoryStore, PlayerStore, StoreError};
