//! Evaluation and selection through the public API.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use chess_core::{coord_to_sq, Board, GameState, Piece, PieceKind, Side};
use greedy_engine::{
    center_occupation_value, material_value, piece_value, score, select_best, threat_value,
    EngineConfig, Game, ScoreWeights,
};

const EPS: f64 = 1e-9;

fn random_board(rng: &mut StdRng, pieces: usize) -> Board {
    let mut squares: Vec<u8> = (0..64).collect();
    squares.shuffle(rng);
    let mut board = Board::empty();
    for &sq in squares.iter().take(pieces) {
        let side = if rng.gen_bool(0.5) { Side::White } else { Side::Black };
        let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
        board.put(sq, Piece::new(side, kind));
    }
    board
}

#[test]
fn material_matches_piece_counts_on_synthetic_boards() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let count = rng.gen_range(0..=32);
        let board = random_board(&mut rng, count);
        let state = GameState::from_board(board.clone(), Side::White);

        for side in Side::ALL {
            let expected: f64 = board
                .iter()
                .filter(|(_, piece)| piece.side == side)
                .map(|(_, piece)| piece_value(piece.kind))
                .sum();
            assert!((material_value(&state, side) - expected).abs() < EPS);
        }
    }
}

#[test]
fn kings_do_not_change_material() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let count = rng.gen_range(0..=20);
        let mut board = random_board(&mut rng, count);
        for side in Side::ALL {
            for sq in board.pieces(side, PieceKind::King) {
                board.remove(sq);
            }
        }
        let without = GameState::from_board(board.clone(), Side::White);

        let empty: Vec<u8> = (0..64).filter(|&sq| board.piece_at(sq).is_none()).collect();
        if let Some(&sq) = empty.first() {
            board.put(sq, Piece::new(Side::White, PieceKind::King));
        }
        let with = GameState::from_board(board, Side::White);

        assert!(
            (material_value(&without, Side::White) - material_value(&with, Side::White)).abs()
                < EPS
        );
    }
}

#[test]
fn center_value_of_lone_pawn() {
    for (coord, expected) in [("d4", 1.5), ("a1", 0.75), ("f6", 1.0), ("h8", 0.75)] {
        let mut board = Board::empty();
        board.put(
            coord_to_sq(coord).expect("valid square"),
            Piece::new(Side::Black, PieceKind::Pawn),
        );
        let state = GameState::from_board(board, Side::Black);
        assert!(
            (center_occupation_value(&state, Side::Black) - expected).abs() < EPS,
            "{coord}"
        );
    }
}

#[test]
fn scandinavian_bishop_scenario() {
    let mut game = Game::new(Side::White, EngineConfig::default());
    for (i, san) in ["e4", "d5", "exd5", "Qxd5", "Bc4"].into_iter().enumerate() {
        game.play_human_move(san)
            .unwrap_or_else(|e| panic!("move {} ({san}) rejected: {e}", i + 1));
    }
    let state = game.state();
    let mover = state.side_to_move();
    assert_eq!(mover, Side::Black);

    let queen_sq = coord_to_sq("d5").expect("valid square");
    let attackers = state.attackers(mover.other(), queen_sq);
    assert_eq!(attackers.popcount(), 1);
    assert!(attackers.contains(coord_to_sq("c4").expect("valid square")));

    assert!((threat_value(state, Side::Black) - 9.0).abs() < EPS);
    assert!((threat_value(state, Side::White) - 5.3).abs() < EPS);
    assert!((material_value(state, Side::White) - 39.0).abs() < EPS);
    assert!((center_occupation_value(state, Side::White) - 30.075).abs() < EPS);
    assert!((score(state, Side::Black, &ScoreWeights::default()) - 19.85).abs() < EPS);
}

#[test]
fn selector_never_mutates_during_random_games() {
    let mut rng = StdRng::seed_from_u64(7);
    let weights = ScoreWeights::default();

    for _ in 0..4 {
        let mut state = GameState::startpos();
        for _ in 0..30 {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let before = state.clone();
            let side = state.side_to_move();
            let best = select_best(&mut state, &moves, side, &weights).expect("moves available");
            assert_eq!(state, before);
            assert!(moves.contains(&best));

            let pick = moves[rng.gen_range(0..moves.len())];
            state.push(pick);
        }
    }
}

#[test]
fn forced_draw_scores_zero_with_unequal_material() {
    // White is a queen up, but the clock has run out
    let state = GameState::from_fen("4k3/8/8/8/8/8/8/Q3K3 b - - 150 90").expect("valid FEN");
    for side in Side::ALL {
        assert_eq!(score(&state, side, &ScoreWeights::default()), 0.0);
    }
}
