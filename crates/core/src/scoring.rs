//! Scoring module - furthest-row scoring and the process-lifetime high score
//!
//! Points are awarded once per newly reached row. Rows are numbered downward,
//! so "further" means a smaller index, and walking back down never re-awards.

use crate::types::{MAX_SCORE, PLAYER_START_ROW};

/// State that outlives a single run: handed to a new game and read back on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Session {
    pub high_score: u32,
}

impl Session {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

/// Per-run score tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    furthest_row: usize,
    session: Session,
}

impl ScoreBoard {
    pub fn new(session: Session) -> Self {
        Self {
            score: 0,
            furthest_row: PLAYER_START_ROW,
            session,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.session.high_score
    }

    pub fn furthest_row(&self) -> usize {
        self.furthest_row
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Record that the player finished a move on `row`.
    ///
    /// Returns `true` if the row was new (strictly above the previous furthest).
    pub fn reach_row(&mut self, row: usize) -> bool {
        if row >= self.furthest_row {
            return false;
        }
        if self.score < MAX_SCORE {
            self.score += 1;
        }
        self.furthest_row = row;
        if self.score > self.session.high_score {
            self.session.high_score = self.score;
        }
        true
    }

    /// New level: progress resets, the high score stays.
    pub fn reset_level(&mut self) {
        self.score = 0;
        self.furthest_row = PLAYER_START_ROW;
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new(Session::default())
    }
}
