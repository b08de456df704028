//! Forsyth-Edwards Notation.

use thiserror::Error;

use crate::board::Board;
use crate::state::{CastlingRights, GameState};
use crate::types::*;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks in placement, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    Piece(char),

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling field '{0}'")]
    Castling(String),

    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),

    #[error("invalid move counter '{0}'")]
    Counter(String),
}

impl GameState {
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::FieldCount(fields.len()));
        }

        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if fields[2] != "-" {
            for c in fields[2].chars() {
                match c {
                    'K' => castling.white_king = true,
                    'Q' => castling.white_queen = true,
                    'k' => castling.black_king = true,
                    'q' => castling.black_queen = true,
                    _ => return Err(FenError::Castling(fields[2].to_string())),
                }
            }
        }

        // The target sits behind a pawn of the side that just moved
        let ep_rank = match side_to_move {
            Side::White => 5,
            Side::Black => 2,
        };
        let en_passant = match fields[3] {
            "-" => None,
            coord => match coord_to_sq(coord) {
                Some(target) if rank_of(target) == ep_rank => Some(target),
                _ => return Err(FenError::EnPassant(coord.to_string())),
            },
        };

        let counter = |field: Option<&&str>, default: u32| -> Result<u32, FenError> {
            match field {
                Some(text) => text.parse().map_err(|_| FenError::Counter(text.to_string())),
                None => Ok(default),
            }
        };
        let halfmove_clock = counter(fields.get(4), 0)?;
        let fullmove_number = counter(fields.get(5), 1)?;

        Ok(GameState::new(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }

    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move {
            Side::White => "w",
            Side::Black => "b",
        };

        let mut castling = String::new();
        let rights = self.castling;
        for (held, c) in [
            (rights.white_king, 'K'),
            (rights.white_queen, 'Q'),
            (rights.black_king, 'k'),
            (rights.black_queen, 'q'),
        ] {
            if held {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant
            .map(sq_to_coord)
            .unwrap_or_else(|| "-".to_string());

        format!(
            "{} {} {} {} {} {}",
            self.board.fen_placement(),
            side,
            castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as i8; // FEN lists rank 8 first
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as i8;
            } else {
                let kind = PieceKind::from_letter(ch).ok_or(FenError::Piece(ch))?;
                let side = if ch.is_ascii_uppercase() {
                    Side::White
                } else {
                    Side::Black
                };
                let target = sq(file, rank).ok_or(FenError::RankWidth { rank: 8 - rank_idx })?;
                board.put(target, Piece::new(side, kind));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::RankWidth { rank: 8 - rank_idx });
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth { rank: 8 - rank_idx });
        }
    }
    Ok(board)
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
