use super::*;

#[test]
fn test_knight_attacks() {
    // Knight on e4 (square 28) attacks 8 squares
    assert_eq!(knight_attacks(28).popcount(), 8);

    // Knight on a1 attacks b3 and c2 only
    let attacks = knight_attacks(0);
    assert_eq!(attacks.popcount(), 2);
    assert!(attacks.contains(10)); // c2
    assert!(attacks.contains(17)); // b3

    // Knight on h8 does not wrap onto the a-file
    let attacks = knight_attacks(63);
    assert_eq!(attacks.popcount(), 2);
    assert!(attacks.contains(46)); // g6
    assert!(attacks.contains(53)); // f7
}

#[test]
fn test_king_attacks() {
    assert_eq!(king_attacks(28).popcount(), 8);
    assert_eq!(king_attacks(0).popcount(), 3);
    assert_eq!(king_attacks(7).popcount(), 3);
}

#[test]
fn test_pawn_attacks() {
    // White pawn on e4 attacks d5 and f5
    let attacks = pawn_attacks(28, Side::White);
    assert_eq!(attacks, Bitboard::from_square(35) | Bitboard::from_square(37));

    // Black pawn on e4 attacks d3 and f3
    let attacks = pawn_attacks(28, Side::Black);
    assert_eq!(attacks, Bitboard::from_square(19) | Bitboard::from_square(21));

    // White pawn on h2 attacks only g3
    assert_eq!(pawn_attacks(15, Side::White), Bitboard::from_square(22));
}

#[test]
fn test_slider_attacks_empty_board() {
    assert_eq!(rook_attacks(28, Bitboard::EMPTY).popcount(), 14);
    assert_eq!(bishop_attacks(28, Bitboard::EMPTY).popcount(), 13);
    assert_eq!(queen_attacks(28, Bitboard::EMPTY).popcount(), 27);
}

#[test]
fn test_rook_attacks_stop_at_blocker() {
    // Rook on a1, blocker on a4
    let attacks = rook_attacks(0, Bitboard::from_square(24));
    assert!(attacks.contains(8)); // a2
    assert!(attacks.contains(16)); // a3
    assert!(attacks.contains(24)); // a4 is included
    assert!(!attacks.contains(32)); // a5 is shadowed
    assert!(attacks.contains(7)); // h1
}

#[test]
fn test_bishop_attacks_stop_at_blocker() {
    // Bishop on c4 (26), blocker on d5 (35)
    let attacks = bishop_attacks(26, Bitboard::from_square(35));
    assert!(attacks.contains(35));
    assert!(!attacks.contains(44)); // e6 is shadowed
    assert!(attacks.contains(5)); // f1
}
