use crate::logic::level::{Difficulty, GameMode};
use serde::{Deserialize, Serialize};

/// One finished game. Serialized as `{difficulty, gameMode, score, date}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub difficulty: Difficulty,
    pub game_mode: GameMode,
    pub score: u32,
    pub date: String,
}

/// Best scores, highest first, at most `capacity` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreList {
    entries: Vec<ScoreRecord>,
    capacity: usize,
}

impl HighScoreList {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Builds a list from previously stored records, restoring the ordering
    /// and size invariants in case the stored data was edited by hand.
    #[must_use]
    pub fn from_records(records: Vec<ScoreRecord>, capacity: usize) -> Self {
        let mut list = Self {
            entries: records,
            capacity,
        };
        list.normalize();
        list
    }

    /// Inserts `record` and keeps the top entries. Ties keep insertion
    /// order, so an equal newer score ranks below the older one.
    pub fn record(&mut self, record: ScoreRecord) {
        self.entries.push(record);
        self.normalize();
    }

    fn normalize(&mut self) {
        // `sort_by_key` is stable.
        self.entries.sort_by_key(|r| std::cmp::Reverse(r.score));
        self.entries.truncate(self.capacity);
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<ScoreRecord> {
        self.entries
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    pub fn from_json(json_str: &str, capacity: usize) -> Result<Self, serde_json::Error> {
        let records: Vec<ScoreRecord> = serde_json::from_str(json_str)?;
        Ok(Self::from_records(records, capacity))
    }
}
