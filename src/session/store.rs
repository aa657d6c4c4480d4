//! Keyed game storage.
//!
//! The session layer only talks to `GameStore`, so backends can be swapped
//! without touching the engine. Two in-process backends are provided:
//!
//! - `InMemoryStore`: snapshots kept as values
//! - `EncodedStore`: snapshots kept in their compact binary encoding

use rustc_hash::FxHashMap;

use crate::error::SnapshotError;

use super::snapshot::GameSnapshot;

/// Storage for game snapshots keyed by game id.
pub trait GameStore {
    /// Load a game, `Ok(None)` if it does not exist.
    fn get(&self, id: &str) -> Result<Option<GameSnapshot>, SnapshotError>;

    /// Insert or replace a game under `snapshot.id`.
    fn put(&mut self, snapshot: GameSnapshot) -> Result<(), SnapshotError>;

    /// Remove a game, returning it if it existed.
    fn delete(&mut self, id: &str) -> Result<Option<GameSnapshot>, SnapshotError>;
}

/// Snapshots held in a hash map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    games: FxHashMap<String, GameSnapshot>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for InMemoryStore {
    fn get(&self, id: &str) -> Result<Option<GameSnapshot>, SnapshotError> {
        Ok(self.games.get(id).cloned())
    }

    fn put(&mut self, snapshot: GameSnapshot) -> Result<(), SnapshotError> {
        self.games.insert(snapshot.id.clone(), snapshot);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<Option<GameSnapshot>, SnapshotError> {
        Ok(self.games.remove(id))
    }
}

/// Snapshots held as encoded bytes, the way a byte-oriented backend would
/// keep them.
#[derive(Clone, Debug, Default)]
pub struct EncodedStore {
    games: FxHashMap<String, Vec<u8>>,
}

impl EncodedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the stored encoding for a game.
    #[must_use]
    pub fn encoded_len(&self, id: &str) -> Option<usize> {
        self.games.get(id).map(Vec::len)
    }
}

impl GameStore for EncodedStore {
    fn get(&self, id: &str) -> Result<Option<GameSnapshot>, SnapshotError> {
        self.games
            .get(id)
            .map(|bytes| GameSnapshot::from_bytes(bytes))
            .transpose()
    }

    fn put(&mut self, snapshot: GameSnapshot) -> Result<(), SnapshotError> {
        let bytes = snapshot.to_bytes()?;
        self.games.insert(snapshot.id, bytes);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<Option<GameSnapshot>, SnapshotError> {
        self.games
            .remove(id)
            .map(|bytes| GameSnapshot::from_bytes(&bytes))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, GameMode};

    fn exercise<S: GameStore>(store: &mut S) {
        assert_eq!(store.get("a").unwrap(), None);

        let snapshot = GameSnapshot::new("a", GameMode::Cpu, Some(Difficulty::Normal));
        store.put(snapshot.clone()).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(snapshot.clone()));

        let mut updated = snapshot.clone();
        updated.is_game_over = true;
        store.put(updated.clone()).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(updated.clone()));

        assert_eq!(store.delete("a").unwrap(), Some(updated));
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.delete("a").unwrap(), None);
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = InMemoryStore::new();
        exercise(&mut store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_encoded_store() {
        let mut store = EncodedStore::new();
        exercise(&mut store);

        store.put(GameSnapshot::new("b", GameMode::Versus, None)).unwrap();
        assert!(store.encoded_len("b").unwrap() > 64);
        assert_eq!(store.encoded_len("missing"), None);
    }

    #[test]
    fn test_in_memory_len() {
        let mut store = InMemoryStore::new();
        store.put(GameSnapshot::new("x", GameMode::Cpu, None)).unwrap();
        store.put(GameSnapshot::new("y", GameMode::Cpu, None)).unwrap();
        store.put(GameSnapshot::new("x", GameMode::Versus, None)).unwrap();
        assert_eq!(store.len(), 2);
    }
}
