//! A human-versus-engine game: turn handling on top of the selector.

use chess_core::{GameState, Move, Outcome, Side};
use tracing::info;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::eval::{evaluate, score, Evaluation};
use crate::select::{select_best_parallel, select_best_scored};

/// A move that was pushed onto the game.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedMove {
    pub mv: Move,
    pub san: String,
    /// Score of the resulting position for the side that moved.
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    human_side: Side,
    config: EngineConfig,
}

impl Game {
    pub fn new(human_side: Side, config: EngineConfig) -> Self {
        Self::from_state(GameState::startpos(), human_side, config)
    }

    pub fn from_state(state: GameState, human_side: Side, config: EngineConfig) -> Self {
        Self {
            state,
            human_side,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn human_side(&self) -> Side {
        self.human_side
    }

    pub fn is_human_turn(&self) -> bool {
        self.state.side_to_move() == self.human_side
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Current position scored for `side` with the configured mate scoring.
    pub fn evaluation(&self, side: Side) -> Evaluation {
        evaluate(&self.state, side, &self.config.weights, self.config.mate_scoring)
    }

    /// Lets the engine choose and play a move for the side to move.
    ///
    /// # Errors
    /// `EngineError::GameOver` when the side to move has no legal moves.
    pub fn play_ai_move(&mut self) -> EngineResult<PlayedMove> {
        let moves = self.state.legal_moves();
        if moves.is_empty() {
            return Err(EngineError::GameOver);
        }

        let side = self.state.side_to_move();
        let weights = self.config.weights;
        let (mv, score) = if self.config.parallel {
            select_best_parallel(&self.state, &moves, side, &weights)?
        } else {
            select_best_scored(&mut self.state, &moves, side, &weights)?
        };

        let san = self.state.san(mv);
        self.state.push(mv);
        info!(%side, %san, score, "engine played");
        Ok(PlayedMove { mv, san, score })
    }

    /// Plays `notation` (SAN or coordinates) for the side to move.
    ///
    /// # Errors
    /// `EngineError::IllegalMove` when the notation does not name exactly one
    /// legal move. The game is left untouched.
    pub fn play_human_move(&mut self, notation: &str) -> EngineResult<PlayedMove> {
        let mv = self
            .state
            .parse_san(notation)
            .map_err(|source| EngineError::IllegalMove {
                notation: notation.to_string(),
                source,
            })?;

        let side = self.state.side_to_move();
        let san = self.state.san(mv);
        self.state.push(mv);
        let score = score(&self.state, side, &self.config.weights);
        info!(%side, %san, score, "human played");
        Ok(PlayedMove { mv, san, score })
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
