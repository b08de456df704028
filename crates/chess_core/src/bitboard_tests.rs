use super::*;

#[test]
fn test_from_square_and_contains() {
    let e4 = Bitboard::from_square(28);
    assert!(e4.contains(28));
    assert!(!e4.contains(27));
    assert_eq!(Bitboard::from_square(63).0, 1 << 63);
}

#[test]
fn test_popcount_of_masks() {
    assert_eq!(Bitboard::FILE_A.popcount(), 8);
    assert_eq!(Bitboard::RANK_8.popcount(), 8);
    assert_eq!(Bitboard::LIGHT_SQUARES.popcount(), 32);
    assert_eq!(Bitboard::ALL.popcount(), 64);
}

#[test]
fn test_light_squares() {
    // h1 is light, a1 is dark
    assert!(Bitboard::LIGHT_SQUARES.contains(7));
    assert!(!Bitboard::LIGHT_SQUARES.contains(0));
    // d1 light, e1 dark
    assert!(Bitboard::LIGHT_SQUARES.contains(3));
    assert!(!Bitboard::LIGHT_SQUARES.contains(4));
}

#[test]
fn test_iterates_ascending() {
    let squares: Vec<u8> = Bitboard(0b1010_0001).collect();
    assert_eq!(squares, vec![0, 5, 7]);
}

#[test]
fn test_set_and_clear() {
    let mut bb = Bitboard::EMPTY;
    bb.set(12);
    bb.set(40);
    bb.clear(12);
    assert_eq!(bb, Bitboard::from_square(40));
    assert_eq!(bb.lsb(), Some(40));
}
