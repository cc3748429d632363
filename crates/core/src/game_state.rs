//! Game state module - manages the complete game state
//!
//! This module ties together the level layout, the player, scoring and the RNG.
//! It owns the per-frame update order and the `Start -> Playing -> GameOver`
//! lifecycle.

use arrayvec::ArrayVec;

use crate::level::Level;
use crate::player::Player;
use crate::rng::GameRng;
use crate::scoring::{ScoreBoard, Session};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    level: Level,
    player: Player,
    scores: ScoreBoard,
    phase: GamePhase,
    rng: GameRng,
    /// Direction edges received since the last tick.
    pending: ArrayVec<Direction, 4>,
    /// Events not yet consumed by the front-end.
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on the title screen.
    pub fn new(seed: u64, session: Session) -> Self {
        let mut rng = GameRng::new(seed);
        let mut level = Level::new();
        level.generate_rows(LEVEL_ROWS, &mut rng);

        Self {
            level,
            player: Player::new(),
            scores: ScoreBoard::new(session),
            phase: GamePhase::Start,
            rng,
            pending: ArrayVec::new(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_dead(&self) -> bool {
        self.player.is_dead()
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score()
    }

    pub fn furthest_row(&self) -> usize {
        self.scores.furthest_row()
    }

    /// The cross-run session, to hand to the next game.
    pub fn session(&self) -> Session {
        self.scores.session()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    #[doc(hidden)]
    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    #[doc(hidden)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Take all events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a game action
    ///
    /// Returns `true` if the action was accepted in the current phase.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Play => {
                if self.phase != GamePhase::Start {
                    return false;
                }
                self.player.respawn();
                self.phase = GamePhase::Playing;
                log::info!("run started (seed {})", self.rng.seed());
                true
            }
            GameAction::Restart => {
                if self.phase != GamePhase::GameOver {
                    return false;
                }
                self.restart();
                true
            }
            GameAction::Move(dir) => {
                if self.phase != GamePhase::Playing || self.player.is_moving() {
                    return false;
                }
                if !self.pending.contains(&dir) {
                    self.pending.push(dir);
                }
                true
            }
        }
    }

    /// Main game tick
    ///
    /// Obstacles and rain animate in every phase; player rules only run while playing.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.level.update_obstacles(elapsed_ms);
        self.level.update_rain(elapsed_ms, &mut self.rng);

        if self.phase != GamePhase::Playing {
            self.pending.clear();
            return;
        }

        if self.touching_bug() {
            self.player_hit(DeathCause::Bug);
            return;
        }

        if self.player.is_moving() {
            // No input buffering while a move is in flight.
            self.pending.clear();
            if self.player.advance_move(elapsed_ms) {
                self.finish_move();
            }
            return;
        }

        self.carry_on_log(elapsed_ms);

        if let Some(dir) = self.resolve_pending() {
            self.start_move(dir);
        }

        if self.phase == GamePhase::Playing
            && (self.player.x < 0.0 || self.player.x > SCREEN_WIDTH)
        {
            self.player_hit(DeathCause::SweptAway);
        }
    }

    /// Start over with a fresh level, keeping the session.
    ///
    /// The title screen is only shown before the first play, so a restarted
    /// game goes straight to `Playing`.
    pub fn restart(&mut self) {
        let seed = self.rng.next_seed();
        let session = self.session();
        *self = Self::new(seed, session);
        self.phase = GamePhase::Playing;
        log::info!("restart (high score {})", session.high_score);
    }

    /// Regenerate the level after the player climbs out of the top row.
    pub fn reset_level(&mut self) {
        self.level.reset();
        self.level.generate_rows(LEVEL_ROWS, &mut self.rng);
        self.player.respawn();
        self.scores.reset_level();
        self.pending.clear();
        self.events.push(GameEvent::LevelCleared);
        log::info!("level cleared (high score {})", self.scores.high_score());
    }

    /// Highest-priority pending edge that is legal right now.
    fn resolve_pending(&mut self) -> Option<Direction> {
        let on_bottom_row = self.player.row() >= PLAYER_START_ROW as i32;
        let chosen = Direction::PRIORITY.into_iter().find(|dir| {
            self.pending.contains(dir) && !(*dir == Direction::Down && on_bottom_row)
        });
        self.pending.clear();
        chosen
    }

    fn start_move(&mut self, dir: Direction) {
        if dir == Direction::Up && self.player.row() == 0 {
            self.reset_level();
            return;
        }

        let (dx, dy) = dir.delta();
        let target_x = (self.player.x + dx as f32 * GRID_SIZE)
            .clamp(GRID_SIZE / 2.0, SCREEN_WIDTH - GRID_SIZE / 2.0);
        let target_y = self.player.y + dy as f32 * GRID_SIZE;
        self.player.begin_move((target_x, target_y));
    }

    fn finish_move(&mut self) {
        let row = self.player.row();
        if let Ok(row) = usize::try_from(row) {
            if self.scores.reach_row(row) {
                self.events.push(GameEvent::Scored {
                    score: self.scores.score(),
                    high_score: self.scores.high_score(),
                });
            }
        }
        self.check_landing();
    }

    /// Water rows need a log underfoot at the end of every move.
    fn check_landing(&mut self) {
        if self.level.kind_at(self.player.row()) != Some(RowKind::Water) {
            return;
        }
        let bounds = self.player.bounds();
        if self.level.overlapping(ObstacleKind::Log, &bounds).is_none() {
            self.player_hit(DeathCause::Drowned);
        }
    }

    fn touching_bug(&self) -> bool {
        let bounds = self.player.bounds();
        self.level.overlapping(ObstacleKind::Bug, &bounds).is_some()
    }

    fn carry_on_log(&mut self, elapsed_ms: u32) {
        let bounds = self.player.bounds();
        if let Some(vx) = self
            .level
            .overlapping(ObstacleKind::Log, &bounds)
            .map(|log| log.vx)
        {
            self.player.x += vx * (elapsed_ms as f32 / 1000.0);
        }
    }

    /// Death transition; repeated calls are no-ops.
    pub fn player_hit(&mut self, cause: DeathCause) {
        if !self.player.kill() {
            return;
        }
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.pending.clear();
        self.events.push(GameEvent::Died {
            cause,
            score: self.scores.score(),
        });
        log::info!("player died: {cause:?} with score {}", self.scores.score());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, Session::default())
    }
}
