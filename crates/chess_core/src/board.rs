//! Piece placement: a mailbox for square lookups kept in sync with one
//! bitboard per (side, kind) for set queries.

use crate::attacks::*;
use crate::bitboard::Bitboard;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    pieces: [[Bitboard; 6]; 2],
    sides: [Bitboard; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            pieces: [[Bitboard::EMPTY; 6]; 2],
            sides: [Bitboard::EMPTY; 2],
        }
    }

    pub fn starting() -> Self {
        let mut board = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            let file = file as u8;
            board.put(file, Piece::new(Side::White, kind));
            board.put(8 + file, Piece::new(Side::White, PieceKind::Pawn));
            board.put(48 + file, Piece::new(Side::Black, PieceKind::Pawn));
            board.put(56 + file, Piece::new(Side::Black, kind));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq as usize]
    }

    /// Places `piece` on `sq`, returning whatever stood there before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let previous = self.remove(sq);
        self.squares[sq as usize] = Some(piece);
        self.pieces[piece.side.idx()][piece.kind.idx()].set(sq);
        self.sides[piece.side.idx()].set(sq);
        previous
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq as usize].take()?;
        self.pieces[piece.side.idx()][piece.kind.idx()].clear(sq);
        self.sides[piece.side.idx()].clear(sq);
        Some(piece)
    }

    #[inline]
    pub fn pieces(&self, side: Side, kind: PieceKind) -> Bitboard {
        self.pieces[side.idx()][kind.idx()]
    }

    #[inline]
    pub fn side_pieces(&self, side: Side) -> Bitboard {
        self.sides[side.idx()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side, PieceKind::King).lsb()
    }

    /// Every piece with its square, a1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Pieces of side `by` that attack `target`, whether or not they are
    /// pinned and whatever stands on `target`.
    pub fn attackers(&self, target: Square, by: Side) -> Bitboard {
        let occupied = self.occupied();
        let diagonal = self.pieces(by, PieceKind::Bishop) | self.pieces(by, PieceKind::Queen);
        let straight = self.pieces(by, PieceKind::Rook) | self.pieces(by, PieceKind::Queen);

        // A pawn of `by` attacks `target` from the squares a pawn of the
        // other side standing on `target` would attack.
        (pawn_attacks(target, by.other()) & self.pieces(by, PieceKind::Pawn))
            | (knight_attacks(target) & self.pieces(by, PieceKind::Knight))
            | (king_attacks(target) & self.pieces(by, PieceKind::King))
            | (bishop_attacks(target, occupied) & diagonal)
            | (rook_attacks(target, occupied) & straight)
    }

    #[inline]
    pub fn is_attacked(&self, target: Square, by: Side) -> bool {
        !self.attackers(target, by).is_empty()
    }

    /// Squares attacked by the piece on `sq`, empty if the square is vacant.
    pub fn attacks_from(&self, sq: Square) -> Bitboard {
        let Some(piece) = self.piece_at(sq) else {
            return Bitboard::EMPTY;
        };
        let occupied = self.occupied();
        match piece.kind {
            PieceKind::Pawn => pawn_attacks(sq, piece.side),
            PieceKind::Knight => knight_attacks(sq),
            PieceKind::Bishop => bishop_attacks(sq, occupied),
            PieceKind::Rook => rook_attacks(sq, occupied),
            PieceKind::Queen => queen_attacks(sq, occupied),
            PieceKind::King => king_attacks(sq),
        }
    }

    /// Text diagram with rank 8 on top, `.` for empty squares.
    pub fn unicode(&self) -> String {
        let mut out = String::with_capacity(8 * 17);
        for rank in (0..8).rev() {
            for file in 0..8 {
                if file > 0 {
                    out.push(' ');
                }
                let sq = rank * 8 + file;
                out.push(self.piece_at(sq).map(Piece::unicode).unwrap_or('.'));
            }
            out.push('\n');
        }
        out
    }

    /// The placement field of a FEN string.
    pub fn fen_placement(&self) -> String {
        let mut out = String::new();
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(rank * 8 + file) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
