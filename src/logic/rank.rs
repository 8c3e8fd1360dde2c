//! Rank classification from cumulative points.

use crate::models::Rank;

/// At or below this a player is in the bottom tier.
pub const BASE_POINT: i64 = 40;
/// Points per tier above the base.
pub const POINT_STEP: i64 = 60;
/// At or above this a player is unconditionally in the top tier.
pub const MAX_POINTS_FOR_TOP_TIER: i64 = 580;

/// Map a point total to its tier. Total over all integers.
///
/// The step formula is clamped below the top tier; only `MAX_POINTS_FOR_TOP_TIER`
/// reaches it.
pub fn classify(total_points: i64) -> Rank {
    if total_points >= MAX_POINTS_FOR_TOP_TIER {
        return Rank::highest();
    }
    if total_points < BASE_POINT {
        return Rank::lowest();
    }
    let index = ((total_points - BASE_POINT) / POINT_STEP) as usize;
    Rank::TIERS[index.min(Rank::TIERS.len() - 2)]
}
