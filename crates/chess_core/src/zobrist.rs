//! Zobrist keys for repetition detection.
//!
//! A position key XORs together one value per piece on its square, one for
//! Black to move, one per castling right still held and one per en-passant
//! file when a capture onto that file is available. Clocks are not hashed,
//! so positions that differ only in move counters share a key.

use crate::types::{Piece, Square};

pub struct ZobristKeys {
    /// Indexed by [side][kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// [white king-side, white queen-side, black king-side, black queen-side]
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Deterministic keys from a splitmix64 stream with a fixed seed.
    pub const fn new() -> Self {
        const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

        const fn mix(mut z: u64) -> u64 {
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        }

        let mut state = 0x5EED_C4E5_5000_0001u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut side = 0;
        while side < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = state.wrapping_add(GAMMA);
                    pieces[side][kind][sq] = mix(state);
                    sq += 1;
                }
                kind += 1;
            }
            side += 1;
        }

        state = state.wrapping_add(GAMMA);
        let black_to_move = mix(state);

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = state.wrapping_add(GAMMA);
            castling[i] = mix(state);
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = state.wrapping_add(GAMMA);
            en_passant[i] = mix(state);
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.side.idx()][piece.kind.idx()][sq as usize]
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
