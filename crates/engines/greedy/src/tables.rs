//! Static weights: material per piece kind and center occupation per square.

use chess_core::{PieceKind, Square};

/// Material weights indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [f64; 6] = [1.0, 3.2, 3.3, 5.0, 9.0, 0.0];

const INNER_CENTER: f64 = 1.5;
const OUTER_CENTER: f64 = 1.0;
const EDGE: f64 = 0.75;

/// Center-occupation multiplier for every square, a1 = 0.
pub static CENTER_WEIGHTS: [f64; 64] = build_center_weights();

const fn build_center_weights() -> [f64; 64] {
    let mut table = [EDGE; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        if file >= 3 && file <= 4 && rank >= 3 && rank <= 4 {
            // d4 d5 e4 e5
            table[sq] = INNER_CENTER;
        } else if file >= 2 && file <= 5 && rank >= 2 && rank <= 5 {
            // ring from c3 to f6
            table[sq] = OUTER_CENTER;
        }
        sq += 1;
    }
    table
}

#[inline]
pub fn piece_value(kind: PieceKind) -> f64 {
    PIECE_VALUES[kind.idx()]
}

#[inline]
pub fn center_weight(sq: Square) -> f64 {
    CENTER_WEIGHTS[sq as usize]
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tables_tests;
