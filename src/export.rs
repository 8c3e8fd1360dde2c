//! Rankings export as CSV.

use crate::models::{Player, Rank};
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct RankingRow<'a> {
    position: usize,
    name: &'a str,
    total_points: i64,
    rank: Rank,
    phone_number: &'a str,
}

const HEADER: [&str; 5] = ["position", "name", "total_points", "rank", "phone_number"];

/// Write `players` (already in ranking order) as CSV. The header row is written
/// even when there are no players.
pub fn write_rankings_csv<W: io::Write>(players: &[Player], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(HEADER)?;
    for (i, p) in players.iter().enumerate() {
        writer.serialize(RankingRow {
            position: i + 1,
            name: &p.name,
            total_points: p.total_points,
            rank: p.rank,
            phone_number: &p.phone_number,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Convenience wrapper returning the CSV as bytes.
pub fn rankings_csv(players: &[Player]) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    write_rankings_csv(players, &mut buf)?;
    Ok(buf)
}
