//! Applying one match result to two player records.

use crate::logic::scoring::evaluate;
use crate::models::{Player, Rank, RankingError};
use crate::store::PlayerStore;
use serde::Serialize;

/// What a match did to one player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerUpdate {
    pub name: String,
    /// Signed point change from this match.
    pub points: i64,
    pub total_points: i64,
    pub new_rank: Rank,
}

impl PlayerUpdate {
    fn from_player(p: &Player, points: i64) -> Self {
        Self {
            name: p.name.clone(),
            points,
            total_points: p.total_points,
            new_rank: p.rank,
        }
    }
}

/// Result of a successfully applied match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchUpdate {
    pub p1_update: PlayerUpdate,
    pub p2_update: PlayerUpdate,
}

/// Apply a best-of-five result between two players identified by name.
///
/// 1. Look up both players (trimmed, exact). Missing names fail before any change.
/// 2. Evaluate the score; an illegal score fails before any change.
/// 3. Add the deltas and reclassify both players.
/// 4. Save both records with one `save_all`.
pub fn apply_match<S: PlayerStore + ?Sized>(
    store: &mut S,
    p1_name: &str,
    p2_name: &str,
    set1: i32,
    set2: i32,
) -> Result<MatchUpdate, RankingError> {
    let p1_name = p1_name.trim();
    let p2_name = p2_name.trim();
    if p1_name.is_empty() || p2_name.is_empty() {
        return Err(RankingError::Validation("Both player names are required".to_string()));
    }
    if p1_name == p2_name {
        return Err(RankingError::Validation(format!(
            "\"{}\" cannot play against themselves",
            p1_name
        )));
    }

    let p1 = store.find_by_name(p1_name)?;
    let p2 = store.find_by_name(p2_name)?;
    let (mut p1, mut p2) = match (p1, p2) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            let missing = [(a.is_none(), p1_name), (b.is_none(), p2_name)]
                .into_iter()
                .filter(|(gone, _)| *gone)
                .map(|(_, name)| name.to_string())
                .collect();
            return Err(RankingError::PlayersNotFound(missing));
        }
    };

    let delta = evaluate(set1, set2)?;
    p1.apply_delta(delta.a);
    p2.apply_delta(delta.b);

    store.save_all(&[p1.clone(), p2.clone()])?;
    log::info!(
        "Match {} {}-{} {}: {} {:+} ({}), {} {:+} ({})",
        p1.name, set1, set2, p2.name, p1.name, delta.a, p1.rank, p2.name, delta.b, p2.rank
    );

    Ok(MatchUpdate {
        p1_update: PlayerUpdate::from_player(&p1, delta.a),
        p2_update: PlayerUpdate::from_player(&p2, delta.b),
    })
}
