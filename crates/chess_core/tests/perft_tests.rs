use std::time::Instant;

use rayon::prelude::*;

use chess_core::{divide, perft, GameState, STARTPOS_FEN};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 250_000;

/// Reference node counts, depth 1 upwards.
const CASES: &[(&str, &[u64])] = &[
    (STARTPOS_FEN, &[20, 400, 8_902, 197_281, 4_865_609]),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[48, 2_039, 97_862, 4_085_603],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[14, 191, 2_812, 43_238, 674_624],
    ),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[6, 264, 9_467, 422_333],
    ),
    (
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[44, 1_486, 62_379, 2_103_487],
    ),
    ("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1", &[24, 496, 9_483, 182_838]),
];

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().enumerate().for_each(|(idx, (fen, counts))| {
        let case_start = Instant::now();
        let mut total_nodes = 0u64;
        let mut ran_depths = Vec::new();

        for (depth, &expected) in (1u8..).zip(counts.iter()) {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for case {} (expected {} nodes), set {}=1 to run all.",
                    depth,
                    idx + 1,
                    expected,
                    FULL_PERFT_ENV
                );
                continue;
            }
            let mut pos = GameState::from_fen(fen).expect("valid FEN");
            let before = pos.clone();
            let got = perft(&mut pos, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for FEN '{}' at depth {}",
                fen, depth
            );
            assert_eq!(pos, before, "perft left '{}' modified", fen);

            ran_depths.push(depth);
            total_nodes += got;
        }

        let elapsed = case_start.elapsed();
        println!(
            "Case {:02} done: depths {:?}, total nodes {}, elapsed {:.3?}",
            idx + 1,
            ran_depths,
            total_nodes,
            elapsed
        );
    });
}

#[test]
fn divide_sums_to_perft() {
    let mut pos = GameState::startpos();
    let split = divide(&mut pos, 3);
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8_902);
    assert_eq!(perft(&mut pos, 0), 1);
}
