//! Player record stores: the trait the engine talks to plus two backends.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::{Player, PlayerId};
use std::fmt;

/// Errors raised by a record store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// Insert or rename would duplicate an existing name.
    NameTaken(String),
    /// Save targeted a record that does not exist.
    Missing(PlayerId),
    /// Reading or writing the backing file failed.
    Io(String),
    /// The backing file could not be (de)serialized.
    Corrupt(String),
    /// A thread panicked while holding the store lock.
    LockPoisoned(&'static str),
    /// The blocking worker running the store operation was lost.
    Worker(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NameTaken(name) => write!(f, "name \"{}\" is already taken", name),
            StoreError::Missing(id) => write!(f, "no stored record with id {}", id),
            StoreError::Io(msg) => write!(f, "i/o failure: {}", msg),
            StoreError::Corrupt(msg) => write!(f, "unreadable player data: {}", msg),
            StoreError::LockPoisoned(operation) => write!(f, "store lock poisoned during {}", operation),
            StoreError::Worker(msg) => write!(f, "store worker failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Storage for player records. Each method is one logical operation.
///
/// Iteration order of `all` is the store's natural order (insertion order for both
/// built-in stores); ranking ties fall back to it.
pub trait PlayerStore {
    fn all(&self) -> Result<Vec<Player>, StoreError>;

    fn find_by_name(&self, name: &str) -> Result<Option<Player>, StoreError>;

    fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;

    /// Insert a new record. Fails with `NameTaken` if the name is in use.
    fn insert(&mut self, player: Player) -> Result<(), StoreError>;

    /// Replace the record with the same id. Fails with `NameTaken` if the (possibly
    /// changed) name belongs to another record.
    fn save(&mut self, player: &Player) -> Result<(), StoreError> {
        self.save_all(std::slice::from_ref(player))
    }

    /// Replace several records as one unit.
    fn save_all(&mut self, players: &[Player]) -> Result<(), StoreError>;

    /// Remove by exact name. Returns whether a record was removed.
    fn delete_by_name(&mut self, name: &str) -> Result<bool, StoreError>;
}

/// Apply `players` onto `records` in place: all or nothing.
pub(crate) fn replace_records(records: &mut [Player], players: &[Player]) -> Result<(), StoreError> {
    let mut positions = Vec::with_capacity(players.len());
    for p in players {
        let idx = records
            .iter()
            .position(|r| r.id == p.id)
            .ok_or(StoreError::Missing(p.id))?;
        let clash = records
            .iter()
            .any(|r| r.name == p.name && r.id != p.id && !players.iter().any(|q| q.id == r.id));
        let clash_in_batch = players.iter().any(|q| q.name == p.name && q.id != p.id);
        if clash || clash_in_batch {
            return Err(StoreError::NameTaken(p.name.clone()));
        }
        positions.push(idx);
    }
    for (idx, p) in positions.into_iter().zip(players) {
        records[idx] = p.clone();
    }
    Ok(())
}
