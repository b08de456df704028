//! Chess rules for the greedy engine: board representation, legal move
//! generation with push/pop, SAN and FEN, and game termination.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod fen;
pub mod movegen;
pub mod outcome;
pub mod perft;
pub mod san;
pub mod state;
pub mod types;
pub mod zobrist;

pub use bitboard::Bitboard;
pub use board::Board;
pub use fen::{FenError, STARTPOS_FEN};
pub use outcome::{Outcome, Termination};
pub use perft::{divide, perft};
pub use san::SanError;
pub use state::{CastlingRights, GameState};
pub use types::*;
pub use zobrist::ZOBRIST;
