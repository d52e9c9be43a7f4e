//! Game session state
//!
//! Owns the current board, score, high score and random source. Moves are
//! dispatched to the board engine; a tile is spawned only after a move that
//! actually changed the board.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::{Board, Direction};
use super::spawn::spawn_random_tile;
use crate::consts::INITIAL_TILES;
use crate::error::SessionError;
use crate::highscores::ScoreStore;

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are accepted
    Playing,
    /// No move can change the board
    GameOver,
}

/// What a single move did, handed back to the caller for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUpdate {
    /// Board after the move (and spawn, if any)
    pub board: Board,
    pub score_delta: u32,
    /// The move changed the board and a tile was spawned
    pub changed: bool,
    /// A merge in this move produced the target tile (play continues)
    pub won: bool,
    /// The board is locked and the game is over
    pub terminal: bool,
}

/// A single game in progress plus the persisted high score
#[derive(Debug)]
pub struct GameSession<S, R = Pcg32> {
    board: Board,
    score: u64,
    high_score: u64,
    phase: GamePhase,
    /// Target tile already reached this game
    reached_target: bool,
    /// Effective moves this game
    moves: u32,
    rng: R,
    store: S,
}

impl<S: ScoreStore> GameSession<S, Pcg32> {
    /// Create a session with a seeded PCG generator
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self::new(store, Pcg32::seed_from_u64(seed))
    }
}

impl<S: ScoreStore, R: Rng> GameSession<S, R> {
    /// Load the high score from `store` and start a fresh game
    pub fn new(store: S, rng: R) -> Self {
        let high_score = store.load();
        let mut session = Self {
            board: Board::empty(),
            score: 0,
            high_score,
            phase: GamePhase::Playing,
            reached_target: false,
            moves: 0,
            rng,
            store,
        };
        session.reset();
        session
    }

    /// Start over: zero score, empty board, two spawned tiles
    pub fn reset(&mut self) -> Board {
        let mut board = Board::empty();
        for _ in 0..INITIAL_TILES {
            match spawn_random_tile(&board, &mut self.rng) {
                Ok(next) => board = next,
                Err(e) => log::error!("Could not place starting tile: {}", e),
            }
        }

        self.board = board;
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.reached_target = false;
        self.moves = 0;

        log::info!("New game (high score {})", self.high_score);
        self.board
    }

    /// Shift the board in `direction`.
    ///
    /// A move that leaves the board as it was changes nothing: no spawn, no
    /// score, no terminal check, no high score write.
    pub fn handle_move(&mut self, direction: Direction) -> SessionUpdate {
        match self.try_handle_move(direction) {
            Ok(update) => update,
            Err(e) => {
                log::error!("Move {} rejected: {}", direction, e);
                self.unchanged()
            }
        }
    }

    /// Like [`handle_move`](Self::handle_move), but surfaces a failed spawn.
    ///
    /// The session is untouched when this returns an error.
    pub fn try_handle_move(&mut self, direction: Direction) -> Result<SessionUpdate, SessionError> {
        if self.phase == GamePhase::GameOver {
            return Ok(self.unchanged());
        }

        let outcome = self.board.apply_move(direction);
        if !outcome.changed {
            log::debug!("Move {} changed nothing", direction);
            return Ok(self.unchanged());
        }

        let board = spawn_random_tile(&outcome.board, &mut self.rng)?;

        self.board = board;
        self.score += u64::from(outcome.score_gain);
        self.moves += 1;
        log::debug!(
            "Move {}: +{} (score {})",
            direction,
            outcome.score_gain,
            self.score
        );

        let won = outcome.reached_target;
        if won {
            self.reached_target = true;
            log::info!("Reached the target tile after {} moves", self.moves);
        }

        self.record_score_if_high();

        let terminal = self.board.is_terminal();
        if terminal {
            self.phase = GamePhase::GameOver;
            log::info!("Game over: final score {}", self.score);
        }

        Ok(SessionUpdate {
            board: self.board,
            score_delta: outcome.score_gain,
            changed: true,
            won,
            terminal,
        })
    }

    /// Parse a key name and move; unknown keys are ignored.
    pub fn handle_key(&mut self, key: &str) -> Option<SessionUpdate> {
        match Direction::from_key(key) {
            Some(direction) => Some(self.handle_move(direction)),
            None => {
                log::debug!("Ignoring key {:?}", key);
                None
            }
        }
    }

    /// Raise the high score to the current score if it is higher and persist it.
    ///
    /// Returns whether the high score changed. Store failures are logged only.
    pub fn record_score_if_high(&mut self) -> bool {
        if self.score <= self.high_score {
            return false;
        }

        self.high_score = self.score;
        if let Err(e) = self.store.save(self.high_score) {
            log::warn!("Could not persist high score {}: {}", self.high_score, e);
        }
        true
    }

    fn unchanged(&self) -> SessionUpdate {
        SessionUpdate {
            board: self.board,
            score_delta: 0,
            changed: false,
            won: false,
            terminal: self.phase == GamePhase::GameOver,
        }
    }
}

impl<S, R> GameSession<S, R> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Target tile has been reached this game (play may continue)
    pub fn has_won(&self) -> bool {
        self.reached_target
    }

    /// Effective moves made this game
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Score to show on the game-over prompt
    pub fn final_score(&self) -> Option<u64> {
        self.is_over().then_some(self.score)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the board, keeping score and win latch (test setup)
    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
        self.phase = GamePhase::Playing;
    }
}
