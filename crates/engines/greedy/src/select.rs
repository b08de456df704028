//! Greedy one-ply move selection.

use chess_core::{GameState, Move, Side};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::eval::{score, ScoreWeights};

/// Picks the move in `moves` whose resulting position scores highest for
/// `side`. Ties keep the earliest move. `state` is left as it was found.
///
/// # Errors
/// `EngineError::InvalidInput` when `moves` is empty.
pub fn select_best(
    state: &mut GameState,
    moves: &[Move],
    side: Side,
    weights: &ScoreWeights,
) -> EngineResult<Move> {
    select_best_scored(state, moves, side, weights).map(|(mv, _)| mv)
}

/// Like [`select_best`], also returning the winning score.
pub fn select_best_scored(
    state: &mut GameState,
    moves: &[Move],
    side: Side,
    weights: &ScoreWeights,
) -> EngineResult<(Move, f64)> {
    let (&first, rest) = moves.split_first().ok_or(EngineError::InvalidInput)?;

    let mut best = first;
    let mut best_score = score_after(state, first, side, weights);

    for &mv in rest {
        let value = score_after(state, mv, side, weights);
        if value > best_score {
            best_score = value;
            best = mv;
        }
    }

    debug!(%side, best = %best, score = best_score, candidates = moves.len(), "selected move");
    Ok((best, best_score))
}

/// Parallel [`select_best_scored`]. Every worker scores on its own clone of
/// `state`; the result matches the sequential selector, ties included.
pub fn select_best_parallel(
    state: &GameState,
    moves: &[Move],
    side: Side,
    weights: &ScoreWeights,
) -> EngineResult<(Move, f64)> {
    let (_, best, best_score) = moves
        .par_iter()
        .enumerate()
        .map_init(
            || state.clone(),
            |local, (idx, &mv)| (idx, mv, score_after(local, mv, side, weights)),
        )
        .reduce_with(|a, b| {
            if b.2 > a.2 || (b.2 == a.2 && b.0 < a.0) {
                b
            } else {
                a
            }
        })
        .ok_or(EngineError::InvalidInput)?;

    debug!(%side, best = %best, score = best_score, candidates = moves.len(), "selected move");
    Ok((best, best_score))
}

fn score_after(state: &mut GameState, mv: Move, side: Side, weights: &ScoreWeights) -> f64 {
    state.push(mv);
    let value = score(state, side, weights);
    state.pop();
    value
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
