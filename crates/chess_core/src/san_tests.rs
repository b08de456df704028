use super::*;
use crate::STARTPOS_FEN;

fn state(fen: &str) -> GameState {
    GameState::from_fen(fen).expect("valid FEN")
}

fn square(coord: &str) -> Square {
    coord_to_sq(coord).expect("valid square")
}

#[test]
fn test_parse_pawn_and_piece_moves() {
    let pos = GameState::startpos();
    assert_eq!(pos.parse_san("e4"), Ok(Move::new(square("e2"), square("e4"))));
    assert_eq!(pos.parse_san("Nf3"), Ok(Move::new(square("g1"), square("f3"))));
    assert_eq!(pos.parse_san("Nf3!?"), Ok(Move::new(square("g1"), square("f3"))));
}

#[test]
fn test_parse_coordinates_for_any_piece() {
    let mut pos = GameState::startpos();
    for text in ["e2e4", "d7d5", "e4d5", "d8d5", "f1c4"] {
        let mv = pos.parse_san(text).expect("legal");
        assert_eq!(mv.coordinates(), text);
        pos.push(mv);
    }
    assert_eq!(
        pos.board().piece_at(square("c4")),
        Some(Piece::new(Side::White, PieceKind::Bishop))
    );
}

#[test]
fn test_ambiguous_knights() {
    let pos = state("rnbqkb1r/pppppppp/5n2/8/8/5N2/PPP1PPPP/RNBQKB1R w KQkq - 2 2");
    assert_eq!(
        pos.parse_san("Nd2"),
        Err(SanError::Ambiguous("Nd2".to_string()))
    );
    assert_eq!(pos.parse_san("Nbd2"), Ok(Move::new(square("b1"), square("d2"))));
    assert_eq!(pos.parse_san("Nfd2"), Ok(Move::new(square("f3"), square("d2"))));
}

#[test]
fn test_san_disambiguates_by_rank() {
    let pos = state("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1");
    let mv = Move::new(square("a1"), square("a3"));
    assert_eq!(pos.san(mv), "R1a3");
    assert_eq!(pos.parse_san("R1a3"), Ok(mv));
    assert!(matches!(pos.parse_san("Ra3"), Err(SanError::Ambiguous(_))));
}

#[test]
fn test_pawn_without_file_cannot_capture() {
    let mut pos = GameState::startpos();
    for text in ["e4", "d5"] {
        let mv = pos.parse_san(text).expect("legal");
        pos.push(mv);
    }
    assert!(matches!(pos.parse_san("xd5"), Err(SanError::Illegal(_))));
    assert_eq!(pos.parse_san("exd5"), Ok(Move::new(square("e4"), square("d5"))));
}

#[test]
fn test_illegal_and_invalid_tokens() {
    let pos = GameState::startpos();
    assert_eq!(pos.parse_san("e5"), Err(SanError::Illegal("e5".to_string())));
    assert_eq!(pos.parse_san("O-O"), Err(SanError::Illegal("O-O".to_string())));
    assert_eq!(pos.parse_san("e9"), Err(SanError::Invalid("e9".to_string())));
    assert_eq!(pos.parse_san(""), Err(SanError::Invalid(String::new())));
    assert!(matches!(pos.parse_san("hello"), Err(SanError::Invalid(_))));
}

#[test]
fn test_castling_tokens() {
    let pos = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for (text, to) in [("O-O", "g1"), ("0-0", "g1"), ("O-O-O", "c1"), ("0-0-0", "c1")] {
        let mv = pos.parse_san(text).expect("legal castle");
        assert!(mv.is_castle);
        assert_eq!(mv.to, square(to));
    }
}

#[test]
fn test_check_and_mate_suffixes() {
    let mut pos = GameState::startpos();
    for text in ["e4", "f5"] {
        let mv = pos.parse_san(text).expect("legal");
        pos.push(mv);
    }
    let check = pos.parse_san("Qh5").expect("legal");
    assert_eq!(pos.san(check), "Qh5+");

    let mut pos = GameState::startpos();
    for text in ["f3", "e5", "g4"] {
        let mv = pos.parse_san(text).expect("legal");
        pos.push(mv);
    }
    let mate = pos.parse_san("Qh4").expect("legal");
    assert_eq!(pos.san(mate), "Qh4#");
}

#[test]
fn test_san_round_trips_every_legal_move() {
    let fens = [
        STARTPOS_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    ];
    for fen in fens {
        let pos = state(fen);
        for mv in pos.legal_moves() {
            let text = pos.san(mv);
            assert_eq!(pos.parse_san(&text), Ok(mv), "{text} in {fen}");
        }
    }
}

#[test]
fn test_promotion_must_match() {
    let pos = state("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let queen = pos.parse_san("e8=Q").expect("legal");
    assert_eq!(queen.promo, Some(PieceKind::Queen));
    assert_eq!(pos.parse_san("e8N").map(|m| m.promo), Ok(Some(PieceKind::Knight)));
    assert!(matches!(pos.parse_san("e8"), Err(SanError::Illegal(_))));
}
