//! Greedy Chess Engine
//!
//! One-ply move selection: every legal move is played, the resulting
//! position is scored for the moving side and the best-scoring move wins.
//! No search beyond that single ply.
//!
//! The score is a weighted sum of five terms:
//! - enemy material
//! - own material
//! - attacks on own pieces, weighted by the attacked piece
//! - attacks on enemy pieces, weighted the same way
//! - occupation of the central squares
//!
//! A seventy-five-move or fivefold-repetition draw scores 0 and checkmate
//! scores positive infinity.

mod error;
mod tables;

pub mod config;
pub mod eval;
pub mod game;
pub mod select;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use eval::{
    center_occupation_value, evaluate, material_value, score, threat_value, Evaluation,
    MateScoring, ScoreBreakdown, ScoreWeights,
};
pub use game::{Game, PlayedMove};
pub use select::{select_best, select_best_parallel, select_best_scored};
pub use tables::{center_weight, piece_value, CENTER_WEIGHTS};
