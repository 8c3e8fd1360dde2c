//! In-memory store, used when no data file is configured and in tests.

use crate::models::{Player, PlayerId};
use crate::store::{replace_records, PlayerStore, StoreError};

/// Players kept in insertion order. Never fails except on name clashes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    players: Vec<Player>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing records (e.g. loaded from disk).
    pub fn with_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerStore for MemoryStore {
    fn all(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.players.clone())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Player>, StoreError> {
        Ok(self.players.iter().find(|p| p.name == name).cloned())
    }

    fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.players.iter().find(|p| p.id == id).cloned())
    }

    fn insert(&mut self, player: Player) -> Result<(), StoreError> {
        if self.players.iter().any(|p| p.name == player.name) {
            return Err(StoreError::NameTaken(player.name));
        }
        self.players.push(player);
        Ok(())
    }

    fn save_all(&mut self, players: &[Player]) -> Result<(), StoreError> {
        replace_records(&mut self.players, players)
    }

    fn delete_by_name(&mut self, name: &str) -> Result<bool, StoreError> {
        let before = self.players.len();
        self.players.retain(|p| p.name != name);
        Ok(self.players.len() != before)
    }
}
