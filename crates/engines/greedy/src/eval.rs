//! Weighted position evaluation from one side's point of view.
//!
//! Four sub-scores feed the weighted sum: material for each side, attacks on
//! each side's pieces and the occupation of central squares. A position
//! ending in a forced draw scores 0 and a checkmate scores infinity.

use chess_core::{GameState, PieceKind, Side};
use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::tables::{center_weight, piece_value};

/// Weights applied, in order, to enemy material, own material, own threat,
/// own vulnerability and own center occupation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct ScoreWeights(pub [f64; 5]);

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights([-1.0, 1.0, 0.5, -0.5, 0.5]);

    /// Only the arity is checked; any five values are accepted.
    pub fn from_slice(values: &[f64]) -> EngineResult<Self> {
        let weights: [f64; 5] = values.try_into().map_err(|_| {
            EngineError::Configuration(format!(
                "expected 5 score weights, found {}",
                values.len()
            ))
        })?;
        Ok(ScoreWeights(weights))
    }

    /// Weighted sum of the five terms.
    pub fn combine(&self, terms: &ScoreBreakdown) -> f64 {
        let [enemy, own, threat, vulnerability, center] = self.0;
        enemy * terms.enemy_material
            + own * terms.own_material
            + threat * terms.own_threat
            + vulnerability * terms.own_vulnerability
            + center * terms.own_center
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Vec<f64>> for ScoreWeights {
    type Error = EngineError;

    fn try_from(values: Vec<f64>) -> EngineResult<Self> {
        Self::from_slice(&values)
    }
}

/// How a checkmated position is scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MateScoring {
    /// Positive infinity whichever side is asking.
    #[default]
    Uniform,
    /// Negative infinity when the evaluated side is the one mated.
    Perspective,
}

/// The five raw terms behind a score, before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub enemy_material: f64,
    pub own_material: f64,
    pub own_threat: f64,
    pub own_vulnerability: f64,
    pub own_center: f64,
}

impl ScoreBreakdown {
    pub fn compute(state: &GameState, side: Side) -> Self {
        ScoreBreakdown {
            enemy_material: material_value(state, side.other()),
            own_material: material_value(state, side),
            own_threat: threat_value(state, side),
            own_vulnerability: threat_value(state, side.other()),
            own_center: center_occupation_value(state, side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub breakdown: ScoreBreakdown,
    pub score: f64,
}

/// Sum of piece weights for `side`. Positions without kings are fine.
pub fn material_value(state: &GameState, side: Side) -> f64 {
    PieceKind::ALL
        .iter()
        .map(|&kind| state.pieces(kind, side).popcount() as f64 * piece_value(kind))
        .sum()
}

/// For each piece of `side`, the number of enemy pieces attacking its square
/// times the piece's weight. Pinned attackers count and defenders are not
/// netted out.
pub fn threat_value(state: &GameState, side: Side) -> f64 {
    let mut total = 0.0;
    for kind in PieceKind::ALL {
        let value = piece_value(kind);
        for sq in state.pieces(kind, side) {
            total += state.attackers(side.other(), sq).popcount() as f64 * value;
        }
    }
    total
}

/// Piece weight times the center weight of its square, summed over `side`.
pub fn center_occupation_value(state: &GameState, side: Side) -> f64 {
    let mut total = 0.0;
    for kind in PieceKind::ALL {
        let value = piece_value(kind);
        for sq in state.pieces(kind, side) {
            total += value * center_weight(sq);
        }
    }
    total
}

/// Scores `state` for `side`. Checkmate is `+inf` for either side.
pub fn score(state: &GameState, side: Side, weights: &ScoreWeights) -> f64 {
    evaluate(state, side, weights, MateScoring::Uniform).score
}

/// Scores `state` for `side` and keeps the terms that produced the score.
///
/// A seventy-five-move or fivefold-repetition draw scores 0 before anything
/// else is considered, so a drawn position never reports a mate.
pub fn evaluate(
    state: &GameState,
    side: Side,
    weights: &ScoreWeights,
    mate: MateScoring,
) -> Evaluation {
    let breakdown = ScoreBreakdown::compute(state, side);

    let score = if state.is_seventyfive_moves() || state.is_fivefold_repetition() {
        0.0
    } else if state.is_checkmate() {
        match mate {
            MateScoring::Perspective if state.side_to_move() == side => f64::NEG_INFINITY,
            _ => f64::INFINITY,
        }
    } else {
        weights.combine(&breakdown)
    };

    debug!(
        side = %side,
        enemy_material = breakdown.enemy_material,
        own_material = breakdown.own_material,
        own_threat = breakdown.own_threat,
        own_vulnerability = breakdown.own_vulnerability,
        own_center = breakdown.own_center,
        score,
        "evaluated position"
    );

    Evaluation { breakdown, score }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
