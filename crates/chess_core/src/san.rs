//! Standard algebraic notation.
//!
//! Parsing accepts the usual short forms (`e4`, `Nbd2`, `exd5`, `e8=Q+`,
//! `O-O`) as well as fully specified coordinates such as `e2e4` or `g1f3`,
//! which may name any piece.

use thiserror::Error;

use crate::bitboard::Bitboard;
use crate::state::GameState;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanError {
    #[error("invalid san: '{0}'")]
    Invalid(String),

    #[error("illegal san: '{0}'")]
    Illegal(String),

    #[error("ambiguous san: '{0}'")]
    Ambiguous(String),
}

/// The pieces of a non-castling SAN token.
#[derive(Debug)]
struct SanParts {
    piece: Option<PieceKind>,
    from_file: Option<i8>,
    from_rank: Option<i8>,
    to: Square,
    promo: Option<PieceKind>,
}

fn split_san(text: &str) -> Option<SanParts> {
    let mut chars: Vec<char> = text.chars().collect();

    let mut promo = None;
    if let Some(&last) = chars.last() {
        if last.is_ascii_alphabetic() {
            promo = Some(PieceKind::from_letter(last).filter(|k| *k != PieceKind::Pawn)?);
            chars.pop();
            if chars.last() == Some(&'=') {
                chars.pop();
            }
        }
    }

    if chars.len() < 2 {
        return None;
    }
    let target: String = chars.split_off(chars.len() - 2).into_iter().collect();
    let to = coord_to_sq(&target)?;

    if matches!(chars.last(), Some('x') | Some('-')) {
        chars.pop();
    }

    let mut rest = chars.into_iter().peekable();
    let piece = match rest.peek() {
        Some(&c) if "NBRQK".contains(c) => {
            rest.next();
            PieceKind::from_letter(c)
        }
        _ => None,
    };
    let from_file = match rest.peek() {
        Some(&c @ 'a'..='h') => {
            rest.next();
            Some((c as u8 - b'a') as i8)
        }
        _ => None,
    };
    let from_rank = match rest.peek() {
        Some(&c @ '1'..='8') => {
            rest.next();
            Some((c as u8 - b'1') as i8)
        }
        _ => None,
    };
    if rest.next().is_some() {
        return None;
    }

    Some(SanParts {
        piece,
        from_file,
        from_rank,
        to,
        promo,
    })
}

impl GameState {
    /// Resolves `text` to a legal move of the side to move.
    pub fn parse_san(&self, text: &str) -> Result<Move, SanError> {
        let trimmed = text.trim().trim_end_matches(&['+', '#', '!', '?'][..]);
        let legal = self.legal_moves();

        if let Some(king_side) = castle_side(trimmed) {
            return legal
                .into_iter()
                .find(|mv| mv.is_castle && (file_of(mv.to) == 6) == king_side)
                .ok_or_else(|| SanError::Illegal(text.to_string()));
        }

        let parts = split_san(trimmed).ok_or_else(|| SanError::Invalid(text.to_string()))?;

        // Fully specified origin: any piece, castling by king coordinates too.
        if parts.piece.is_none() {
            if let (Some(file), Some(rank)) = (parts.from_file, parts.from_rank) {
                let from = sq(file, rank).ok_or_else(|| SanError::Invalid(text.to_string()))?;
                return legal
                    .into_iter()
                    .find(|mv| mv.from == from && mv.to == parts.to && mv.promo == parts.promo)
                    .ok_or_else(|| SanError::Illegal(text.to_string()));
            }
        }

        let kind = parts.piece.unwrap_or(PieceKind::Pawn);
        let mut from_mask = self.board.pieces(self.side_to_move, kind);
        if let Some(file) = parts.from_file {
            from_mask &= Bitboard::file(file as u8);
        } else if kind == PieceKind::Pawn {
            // Pawn captures must name their file.
            from_mask &= Bitboard::file(file_of(parts.to) as u8);
        }
        if let Some(rank) = parts.from_rank {
            from_mask &= Bitboard::rank(rank as u8);
        }

        let mut matched: Option<Move> = None;
        for mv in legal {
            if mv.to != parts.to || !from_mask.contains(mv.from) || mv.promo != parts.promo {
                continue;
            }
            if mv.is_castle {
                continue;
            }
            if matched.is_some() {
                return Err(SanError::Ambiguous(text.to_string()));
            }
            matched = Some(mv);
        }
        matched.ok_or_else(|| SanError::Illegal(text.to_string()))
    }

    /// SAN of `mv`, which must be legal here, with `+`/`#` suffix.
    pub fn san(&self, mv: Move) -> String {
        let mut out = self.san_without_suffix(mv);
        let mut after = self.clone();
        after.push(mv);
        if after.is_checkmate() {
            out.push('#');
        } else if after.is_check() {
            out.push('+');
        }
        out
    }

    fn san_without_suffix(&self, mv: Move) -> String {
        if mv.is_castle {
            return if file_of(mv.to) == 6 { "O-O" } else { "O-O-O" }.to_string();
        }
        let Some(piece) = self.board.piece_at(mv.from) else {
            return mv.coordinates();
        };
        let capture = mv.is_en_passant || self.board.piece_at(mv.to).is_some();
        let mut out = String::new();

        match piece.kind.san_letter() {
            None => {
                if capture {
                    out.push((b'a' + file_of(mv.from) as u8) as char);
                }
            }
            Some(letter) => {
                out.push(letter);
                if piece.kind != PieceKind::King {
                    out.push_str(&self.disambiguation(mv, piece.kind));
                }
            }
        }

        if capture {
            out.push('x');
        }
        out.push_str(&sq_to_coord(mv.to));
        if let Some(promo) = mv.promo.and_then(PieceKind::san_letter) {
            out.push('=');
            out.push(promo);
        }
        out
    }

    fn disambiguation(&self, mv: Move, kind: PieceKind) -> String {
        let rivals: Vec<Square> = self
            .legal_moves()
            .into_iter()
            .filter(|other| other.to == mv.to && other.from != mv.from)
            .filter(|other| self.board.piece_at(other.from).map(|p| p.kind) == Some(kind))
            .map(|other| other.from)
            .collect();

        let file = (b'a' + file_of(mv.from) as u8) as char;
        let rank = (b'1' + rank_of(mv.from) as u8) as char;
        if rivals.is_empty() {
            String::new()
        } else if rivals.iter().all(|&r| file_of(r) != file_of(mv.from)) {
            file.to_string()
        } else if rivals.iter().all(|&r| rank_of(r) != rank_of(mv.from)) {
            rank.to_string()
        } else {
            format!("{file}{rank}")
        }
    }
}

/// `Some(true)` for king-side, `Some(false)` for queen-side castling tokens.
fn castle_side(text: &str) -> Option<bool> {
    match text {
        "O-O" | "0-0" => Some(true),
        "O-O-O" | "0-0-0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
