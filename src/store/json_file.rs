//! JSON file store: the whole roster is rewritten on every mutation.

use crate::models::{Player, PlayerId};
use crate::store::{MemoryStore, PlayerStore, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Players persisted as a JSON array at `path`.
///
/// Mutations are applied to a copy, written to `<path>.tmp` and renamed over `path`;
/// the in-memory copy is only replaced once the rename succeeded, so a failed write
/// leaves both memory and disk at the previous state.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty roster.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let players = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Vec::new(),
            Ok(text) => serde_json::from_str::<Vec<Player>>(&text)
                .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Io(format!("{}: {}", path.display(), e))),
        };
        Ok(Self {
            path,
            inner: MemoryStore::with_players(players),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn write(&self, players: &[Player]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(players).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).map_err(|e| StoreError::Io(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(format!("{}: {}", self.path.display(), e)))
    }

    /// Run `change` on a copy, persist it, then adopt it.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.inner.clone();
        let out = change(&mut next)?;
        self.write(next.players())?;
        self.inner = next;
        Ok(out)
    }
}

impl PlayerStore for JsonFileStore {
    fn all(&self) -> Result<Vec<Player>, StoreError> {
        self.inner.all()
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Player>, StoreError> {
        self.inner.find_by_name(name)
    }

    fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        self.inner.find_by_id(id)
    }

    fn insert(&mut self, player: Player) -> Result<(), StoreError> {
        self.commit(|s| s.insert(player))
    }

    fn save_all(&mut self, players: &[Player]) -> Result<(), StoreError> {
        self.commit(|s| s.save_all(players))
    }

    fn delete_by_name(&mut self, name: &str) -> Result<bool, StoreError> {
        if self.inner.find_by_name(name)?.is_none() {
            return Ok(false);
        }
        self.commit(|s| s.delete_by_name(name))
    }
}
