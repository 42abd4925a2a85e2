//! High score leaderboard system
//!
//! Persisted to a JSON file, tracks the top 5 scores.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::{self, PersistenceError};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub player_name: String,
    pub score: u32,
}

impl HighScoreEntry {
    pub fn new(player_name: impl Into<String>, score: u32) -> Self {
        Self {
            player_name: player_name.into(),
            score,
        }
    }
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from entries in any order
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        // Stable, so equal scores keep their stored order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries
            .iter()
            .map(|e| e.score)
            .min()
            .map(|lowest| score > lowest)
            .unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        Some(self.insertion_index(score) + 1)
    }

    /// Insert an entry after every entry with an equal or higher score, then
    /// trim to `MAX_HIGH_SCORES`. Returns the 1-indexed rank, or None if the
    /// entry fell off the end.
    pub fn insert(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let index = self.insertion_index(entry.score);
        self.entries.insert(index, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        (index < MAX_HIGH_SCORES).then_some(index + 1)
    }

    fn insertion_index(&self, score: u32) -> usize {
        self.entries
            .iter()
            .position(|e| e.score < score)
            .unwrap_or(self.entries.len())
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from `path`. A missing or corrupt file gives an
    /// empty leaderboard.
    pub fn load(path: &Path) -> Self {
        match persistence::load_json::<Vec<HighScoreEntry>>(path) {
            Ok(Some(entries)) => {
                log::info!("Loaded {} high scores", entries.len());
                Self::from_entries(entries)
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Could not read high scores: {e}");
                Self::new()
            }
        }
    }

    /// Save the full list, in order, to `path`
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        persistence::save_json(path, &self.entries)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
