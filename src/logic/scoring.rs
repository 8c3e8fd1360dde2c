//! Outcome evaluation: best-of-five set score to a zero-sum point delta.

use serde::Serialize;
use std::fmt;

/// Games needed to win a best-of-five match.
pub const GAMES_TO_WIN: i32 = 3;

/// Points awarded to the winner, keyed by (winner games, loser games).
/// The loser receives the negation.
pub const SCORE_TABLE: [((i32, i32), i64); 3] = [((3, 0), 15), ((3, 1), 10), ((3, 2), 5)];

/// Signed point change for each side of one match. `a + b == 0`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PointDelta {
    pub a: i64,
    pub b: i64,
}

/// The set score is not one of 3-0, 3-1, 3-2, 0-3, 1-3, 2-3.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidScore {
    pub set_a: i32,
    pub set_b: i32,
}

impl fmt::Display for InvalidScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid score {}-{}. The result must be 3-0, 3-1, 3-2, 0-3, 1-3 or 2-3",
            self.set_a, self.set_b
        )
    }
}

impl std::error::Error for InvalidScore {}

fn winner_points(winner: i32, loser: i32) -> Option<i64> {
    SCORE_TABLE
        .iter()
        .find(|(key, _)| *key == (winner, loser))
        .map(|(_, points)| *points)
}

/// Convert a set score into point deltas for side A and side B.
pub fn evaluate(set_a: i32, set_b: i32) -> Result<PointDelta, InvalidScore> {
    let invalid = InvalidScore { set_a, set_b };
    if set_a == GAMES_TO_WIN {
        let points = winner_points(set_a, set_b).ok_or(invalid)?;
        Ok(PointDelta { a: points, b: -points })
    } else if set_b == GAMES_TO_WIN {
        let points = winner_points(set_b, set_a).ok_or(invalid)?;
        Ok(PointDelta { a: -points, b: points })
    } else {
        Err(invalid)
    }
}
