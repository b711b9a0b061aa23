//! Score persistence.
//!
//! The host calls into a [`ScoreBoard`] only at game over and when the pause
//! menu opens, never from inside a tick.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("leaderboard format: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub identity: String,
    pub score: u32,
}

pub trait ScoreBoard {
    /// Record a finished run. Only a player's best score is kept.
    fn submit(&mut self, identity: &str, score: u32) -> Result<(), LeaderboardError>;
    /// Best `n` entries, highest first.
    fn top(&self, n: usize) -> Vec<ScoreEntry>;
    /// 1 + the number of entries strictly above `score`.
    fn rank_of(&self, score: u32) -> usize;
}

/// In-memory board. Entries stay sorted by descending score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryScoreBoard {
    entries: Vec<ScoreEntry>,
}

impl MemoryScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sort(&mut self) {
        // Ties keep submission order.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }
}

impl ScoreBoard for MemoryScoreBoard {
    fn submit(&mut self, identity: &str, score: u32) -> Result<(), LeaderboardError> {
        match self.entries.iter_mut().find(|e| e.identity == identity) {
            Some(entry) => {
                if score <= entry.score {
                    return Ok(());
                }
                entry.score = score;
            }
            None => self.entries.push(ScoreEntry {
                identity: identity.to_string(),
                score,
            }),
        }
        self.sort();
        Ok(())
    }

    fn top(&self, n: usize) -> Vec<ScoreEntry> {
        self.entries.iter().take(n).cloned().collect()
    }

    fn rank_of(&self, score: u32) -> usize {
        1 + self.entries.iter().filter(|e| e.score > score).count()
    }
}

/// Board persisted as a JSON file, rewritten on every accepted submission.
#[derive(Debug, Clone)]
pub struct JsonScoreBoard {
    path: PathBuf,
    board: MemoryScoreBoard,
}

impl JsonScoreBoard {
    /// Open the board at `path`. A missing file is an empty board.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LeaderboardError> {
        let path = path.as_ref().to_path_buf();
        let board = match fs::read_to_string(&path) {
            Ok(json) => {
                let mut board: MemoryScoreBoard = serde_json::from_str(&json)?;
                board.sort();
                board
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => MemoryScoreBoard::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("leaderboard {} opened with {} entries", path.display(), board.len());
        Ok(Self { path, board })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), LeaderboardError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.board)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ScoreBoard for JsonScoreBoard {
    fn submit(&mut self, identity: &str, score: u32) -> Result<(), LeaderboardError> {
        self.board.submit(identity, score)?;
        self.save()
    }

    fn top(&self, n: usize) -> Vec<ScoreEntry> {
        self.board.top(n)
    }

    fn rank_of(&self, score: u32) -> usize {
        self.board.rank_of(score)
    }
}
