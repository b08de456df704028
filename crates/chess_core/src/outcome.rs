//! Game termination queries.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::state::GameState;
use crate::types::{PieceKind, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    /// `None` for draws.
    pub winner: Option<Side>,
}

impl Outcome {
    /// PGN-style result string.
    pub fn result(&self) -> &'static str {
        match self.winner {
            Some(Side::White) => "1-0",
            Some(Side::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.termination {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::SeventyFiveMoves => "seventy-five-move rule",
            Termination::FivefoldRepetition => "fivefold repetition",
        };
        match self.winner {
            Some(side) => write!(f, "{} ({side} wins by {reason})", self.result()),
            None => write!(f, "{} (draw by {reason})", self.result()),
        }
    }
}

impl GameState {
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    /// Fifty full moves without a capture or pawn move; claimable, not forced.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Seventy-five full moves without a capture or pawn move, unless the
    /// last move delivered mate.
    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= 150 && self.has_legal_moves()
    }

    /// Claimable draw: the current position occurred at least three times.
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetitions() >= 3
    }

    /// Forced draw: the current position occurred at least five times.
    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= 5
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on squares of one color.
    pub fn is_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy_or_pawn = Side::ALL.iter().any(|&side| {
            [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen]
                .iter()
                .any(|&kind| !board.pieces(side, kind).is_empty())
        });
        if heavy_or_pawn {
            return false;
        }

        let knights = board.pieces(Side::White, PieceKind::Knight)
            | board.pieces(Side::Black, PieceKind::Knight);
        let bishops = board.pieces(Side::White, PieceKind::Bishop)
            | board.pieces(Side::Black, PieceKind::Bishop);

        if knights.is_empty() {
            let on_light = (bishops & Bitboard::LIGHT_SQUARES).popcount();
            return on_light == 0 || on_light == bishops.popcount();
        }
        knights.popcount() == 1 && bishops.is_empty()
    }

    /// The result if the game has ended by rule, `None` while play goes on.
    pub fn outcome(&self) -> Option<Outcome> {
        let draw = |termination| Some(Outcome { termination, winner: None });

        if self.is_checkmate() {
            return Some(Outcome {
                termination: Termination::Checkmate,
                winner: Some(self.side_to_move.other()),
            });
        }
        if self.is_insufficient_material() {
            return draw(Termination::InsufficientMaterial);
        }
        if self.is_stalemate() {
            return draw(Termination::Stalemate);
        }
        if self.is_seventyfive_moves() {
            return draw(Termination::SeventyFiveMoves);
        }
        if self.is_fivefold_repetition() {
            return draw(Termination::FivefoldRepetition);
        }
        None
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
