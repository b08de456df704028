use crate::attacks::pawn_attacks;
use crate::state::{apply_to_board, GameState};
use crate::types::*;

impl GameState {
    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    /// Fills `out` with the legal moves, reusing its allocation.
    pub fn legal_moves_into(&self, out: &mut Vec<Move>) {
        out.clear();
        self.pseudo_moves(out);
        out.retain(|&mv| self.keeps_king_safe(mv));
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut pseudo = Vec::with_capacity(64);
        self.pseudo_moves(&mut pseudo);
        pseudo.into_iter().any(|mv| self.keeps_king_safe(mv))
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// True when some pawn of the side to move can legally take en passant.
    pub(crate) fn has_legal_en_passant(&self) -> bool {
        let side = self.side_to_move;
        let Some(ep) = self.en_passant else {
            return false;
        };
        if !self.en_passant_victim(ep) {
            return false;
        }
        let capturers = pawn_attacks(ep, side.other()) & self.board.pieces(side, PieceKind::Pawn);
        capturers.into_iter().any(|from| {
            let mut mv = Move::new(from, ep);
            mv.is_en_passant = true;
            self.keeps_king_safe(mv)
        })
    }

    // The target must be empty with an enemy pawn just beyond it.
    fn en_passant_victim(&self, ep: Square) -> bool {
        let side = self.side_to_move;
        let enemy_pawn = Some(Piece::new(side.other(), PieceKind::Pawn));
        self.board.piece_at(ep).is_none()
            && sq(file_of(ep), rank_of(ep) - side.forward())
                .is_some_and(|at| self.board.piece_at(at) == enemy_pawn)
    }

    fn keeps_king_safe(&self, mv: Move) -> bool {
        let mover = self.side_to_move;
        let mut board = self.board.clone();
        apply_to_board(&mut board, mv);
        match board.king_square(mover) {
            Some(king) => !board.is_attacked(king, mover.other()),
            None => true,
        }
    }

    fn pseudo_moves(&self, out: &mut Vec<Move>) {
        let side = self.side_to_move;
        let own = self.board.side_pieces(side);

        for from in own {
            let Some(piece) = self.board.piece_at(from) else {
                continue;
            };
            match piece.kind {
                PieceKind::Pawn => self.gen_pawn(from, out),
                _ => {
                    for to in self.board.attacks_from(from) & !own {
                        out.push(Move::new(from, to));
                    }
                    if piece.kind == PieceKind::King {
                        self.gen_castle(from, out);
                    }
                }
            }
        }
    }

    fn gen_pawn(&self, from: Square, out: &mut Vec<Move>) {
        let side = self.side_to_move;
        let occupied = self.board.occupied();
        let enemy = self.board.side_pieces(side.other());
        let (f, r) = (file_of(from), rank_of(from));
        let start_rank = match side {
            Side::White => 1,
            Side::Black => 6,
        };

        let push_targets = |to: Square, out: &mut Vec<Move>, en_passant: bool| {
            if to < 8 || to >= 56 {
                for kind in PieceKind::PROMOTIONS {
                    out.push(Move::promotion(from, to, kind));
                }
            } else {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = en_passant;
                out.push(mv);
            }
        };

        if let Some(one) = sq(f, r + side.forward()) {
            if !occupied.contains(one) {
                push_targets(one, out, false);
                if r == start_rank {
                    if let Some(two) = sq(f, r + 2 * side.forward()) {
                        if !occupied.contains(two) {
                            push_targets(two, out, false);
                        }
                    }
                }
            }
        }

        let attacks = pawn_attacks(from, side);
        for to in attacks & enemy {
            push_targets(to, out, false);
        }
        if let Some(ep) = self.en_passant {
            if attacks.contains(ep) && self.en_passant_victim(ep) {
                push_targets(ep, out, true);
            }
        }
    }

    fn gen_castle(&self, from: Square, out: &mut Vec<Move>) {
        let side = self.side_to_move;
        let home: Square = match side {
            Side::White => 4,
            Side::Black => 60,
        };
        if from != home || self.in_check(side) {
            return;
        }
        let enemy = side.other();
        let occupied = self.board.occupied();
        let clear = |squares: &[Square]| squares.iter().all(|&s| !occupied.contains(s));
        let safe = |squares: &[Square]| squares.iter().all(|&s| !self.board.is_attacked(s, enemy));
        let rook = Some(Piece::new(side, PieceKind::Rook));

        if self.castling.king_side(side)
            && self.board.piece_at(home + 3) == rook
            && clear(&[home + 1, home + 2])
            && safe(&[home + 1, home + 2])
        {
            let mut mv = Move::new(home, home + 2);
            mv.is_castle = true;
            out.push(mv);
        }
        if self.castling.queen_side(side)
            && self.board.piece_at(home - 4) == rook
            && clear(&[home - 1, home - 2, home - 3])
            && safe(&[home - 1, home - 2])
        {
            let mut mv = Move::new(home, home - 2);
            mv.is_castle = true;
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
