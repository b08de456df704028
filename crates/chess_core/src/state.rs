//! Game state with push/pop move history.
//!
//! `push` applies a move and records everything needed to take it back;
//! `pop` restores the previous state exactly. Callers that look ahead must
//! balance every push with a pop.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::*;
use crate::zobrist::ZOBRIST;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_king: bool,
    pub white_queen: bool,
    pub black_king: bool,
    pub black_queen: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        white_king: false,
        white_queen: false,
        black_king: false,
        black_queen: false,
    };

    pub const ALL: CastlingRights = CastlingRights {
        white_king: true,
        white_queen: true,
        black_king: true,
        black_queen: true,
    };

    pub fn king_side(&self, side: Side) -> bool {
        match side {
            Side::White => self.white_king,
            Side::Black => self.black_king,
        }
    }

    pub fn queen_side(&self, side: Side) -> bool {
        match side {
            Side::White => self.white_queen,
            Side::Black => self.black_queen,
        }
    }

    fn as_array(&self) -> [bool; 4] {
        [
            self.white_king,
            self.white_queen,
            self.black_king,
            self.black_queen,
        ]
    }

    /// Drops every right that depends on a piece standing on `sq`.
    fn touch(&mut self, sq: Square) {
        match sq {
            0 => self.white_queen = false,
            7 => self.white_king = false,
            4 => {
                self.white_king = false;
                self.white_queen = false;
            }
            56 => self.black_queen = false,
            63 => self.black_king = false,
            60 => {
                self.black_king = false;
                self.black_queen = false;
            }
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Undo {
    mv: Move,
    moved: Piece,
    captured: Option<Piece>,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    key: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Side,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>, // square behind a pawn that just advanced 2
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    key: u64,
    stack: Vec<Undo>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::startpos()
    }
}

/// King and rook squares of a castling move, keyed by the king's destination.
pub(crate) fn castle_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        6 => Some((7, 5)),
        2 => Some((0, 3)),
        62 => Some((63, 61)),
        58 => Some((56, 59)),
        _ => None,
    }
}

/// Moves the pieces of `mv` on `board` without any bookkeeping.
/// Returns the captured piece, including a pawn taken en passant.
pub(crate) fn apply_to_board(board: &mut Board, mv: Move) -> Option<Piece> {
    let moved = board.remove(mv.from)?;
    let captured = if mv.is_en_passant {
        sq(file_of(mv.to), rank_of(mv.from)).and_then(|cap| board.remove(cap))
    } else {
        board.remove(mv.to)
    };

    let placed = match mv.promo {
        Some(kind) if moved.kind == PieceKind::Pawn => Piece::new(moved.side, kind),
        _ => moved,
    };
    board.put(mv.to, placed);

    if mv.is_castle {
        if let Some((rook_from, rook_to)) = castle_rook_squares(mv.to) {
            if let Some(rook) = board.remove(rook_from) {
                board.put(rook_to, rook);
            }
        }
    }
    captured
}

impl GameState {
    pub fn startpos() -> Self {
        Self::new(Board::starting(), Side::White, CastlingRights::ALL, None, 0, 1)
    }

    /// A position built from bare piece placement: no castling rights, no
    /// en-passant square, fresh clocks.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self::new(board, side_to_move, CastlingRights::NONE, None, 0, 1)
    }

    pub(crate) fn new(
        board: Board,
        side_to_move: Side,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut state = GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            key: 0,
            stack: Vec::new(),
        };
        state.key = state.compute_key();
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Repetition key of the current position.
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Squares holding pieces of `kind` for `side`.
    #[inline]
    pub fn pieces(&self, kind: PieceKind, side: Side) -> Bitboard {
        self.board.pieces(side, kind)
    }

    /// Pieces of `by` attacking `target`.
    #[inline]
    pub fn attackers(&self, by: Side, target: Square) -> Bitboard {
        self.board.attackers(target, by)
    }

    /// Moves pushed so far, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|undo| undo.mv)
    }

    pub fn peek(&self) -> Option<Move> {
        self.stack.last().map(|undo| undo.mv)
    }

    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    pub fn in_check(&self, side: Side) -> bool {
        match self.board.king_square(side) {
            Some(king) => self.board.is_attacked(king, side.other()),
            None => false,
        }
    }

    pub fn is_check(&self) -> bool {
        self.in_check(self.side_to_move)
    }

    pub(crate) fn compute_key(&self) -> u64 {
        let mut key = 0u64;
        for (sq, piece) in self.board.iter() {
            key ^= ZOBRIST.piece_key(piece, sq);
        }
        if self.side_to_move == Side::Black {
            key ^= ZOBRIST.black_to_move;
        }
        for (i, held) in self.castling.as_array().into_iter().enumerate() {
            if held {
                key ^= ZOBRIST.castling[i];
            }
        }
        // Only a legal en-passant capture makes the square part of the position
        if let Some(ep) = self.en_passant.filter(|_| self.has_legal_en_passant()) {
            key ^= ZOBRIST.en_passant[file_of(ep) as usize];
        }
        key
    }

    /// Applies `mv`, which must be legal in the current position.
    ///
    /// # Panics
    /// If the from-square is empty.
    pub fn push(&mut self, mv: Move) {
        let moved = self
            .board
            .piece_at(mv.from)
            .expect("push: no piece on from-square");

        let undo = Undo {
            mv,
            moved,
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            key: self.key,
        };

        let captured = apply_to_board(&mut self.board, mv);

        self.castling.touch(mv.from);
        self.castling.touch(mv.to);

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
            self.en_passant = sq(file_of(mv.from), (rank_of(mv.from) + rank_of(mv.to)) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Side::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();
        self.key = self.compute_key();

        self.stack.push(Undo { captured, ..undo });
    }

    /// Takes back the most recent move. Returns `None` when nothing was pushed.
    pub fn pop(&mut self) -> Option<Move> {
        let undo = self.stack.pop()?;
        let mv = undo.mv;

        if mv.is_castle {
            if let Some((rook_from, rook_to)) = castle_rook_squares(mv.to) {
                if let Some(rook) = self.board.remove(rook_to) {
                    self.board.put(rook_from, rook);
                }
            }
        }

        self.board.remove(mv.to);
        self.board.put(mv.from, undo.moved);
        if let Some(captured) = undo.captured {
            let at = if mv.is_en_passant {
                sq(file_of(mv.to), rank_of(mv.from)).unwrap_or(mv.to)
            } else {
                mv.to
            };
            self.board.put(at, captured);
        }

        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.key = undo.key;
        Some(mv)
    }

    /// How many times the current position has occurred, counting now.
    pub fn repetitions(&self) -> usize {
        1 + self.stack.iter().filter(|undo| undo.key == self.key).count()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
