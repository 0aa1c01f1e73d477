//! High-score persistence contract.
//!
//! The engine only needs a single slot that is read once at startup and
//! overwritten at the end of every game. Hosts supply the backing storage;
//! browsers use `localStorage`, tests use [`MemoryStore`].

use crate::logic::high_scores::ScoreRecord;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No storage backend is reachable (private mode, no window, ...).
    Unavailable,
    /// The slot exists but does not hold a score list.
    Malformed(String),
    /// The backend refused the write.
    Write(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage unavailable"),
            Self::Malformed(e) => write!(f, "malformed high-score data: {e}"),
            Self::Write(e) => write!(f, "failed to write high scores: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

pub trait HighScoreStore {
    /// Reads the persisted list. An absent slot is `Ok(vec![])`.
    fn load(&self) -> Result<Vec<ScoreRecord>, StoreError>;

    /// Overwrites the slot with `records`.
    fn save(&mut self, records: &[ScoreRecord]) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    records: Option<Vec<ScoreRecord>>,
    writes: usize,
    fail_load: bool,
}

/// In-memory store. Clones share the same slot, so a caller can keep a
/// handle after moving one into the engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().records = Some(records);
        store
    }

    /// A store whose slot holds unreadable data.
    #[must_use]
    pub fn corrupted() -> Self {
        let store = Self::default();
        store.inner.borrow_mut().fail_load = true;
        store
    }

    #[must_use]
    pub fn records(&self) -> Vec<ScoreRecord> {
        self.inner.borrow().records.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        let inner = self.inner.borrow();
        if inner.fail_load {
            return Err(StoreError::Malformed("corrupted slot".to_string()));
        }
        Ok(inner.records.clone().unwrap_or_default())
    }

    fn save(&mut self, records: &[ScoreRecord]) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.records = Some(records.to_vec());
        inner.fail_load = false;
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::level::{Difficulty, GameMode};

    #[test]
    fn test_memory_store_shares_slot() {
        let handle = MemoryStore::new();
        let mut store = handle.clone();
        assert_eq!(store.load().unwrap(), Vec::new());

        let record = ScoreRecord {
            difficulty: Difficulty::Medium,
            game_mode: GameMode::Survival,
            score: 4,
            date: "2024-05-01T00:00:00.000Z".to_string(),
        };
        store.save(std::slice::from_ref(&record)).unwrap();
        assert_eq!(handle.records(), vec![record]);
        assert_eq!(handle.writes(), 1);
    }

    #[test]
    fn test_corrupted_store() {
        let store = MemoryStore::corrupted();
        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));
        assert_eq!(
            StoreError::Unavailable.to_string(),
            "storage unavailable"
        );
    }
}
