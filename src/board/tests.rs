use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::*;
use crate::game::Player;

fn hash_of(board: &Board) -> u64 {
    let mut h = DefaultHasher::new();
    board.hash(&mut h);
    h.finish()
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(4, 7);
    assert_eq!(pos.row, 4);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(3, 3);
    assert_eq!(pos.offset(1, -1, 2), Pos::new(5, 1));
    assert_eq!(pos.offset(-1, 0, 3), Pos::new(0, 3));
    // Off-board coordinates are representable; the board decides
    assert_eq!(pos.offset(-1, -1, 4), Pos::new(-1, -1));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 7) < Pos::new(1, 0));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(8, 8);
    assert_eq!(board.row_size(), 8);
    assert_eq!(board.col_size(), 8);
    for r in 0..8 {
        for c in 0..8 {
            assert_eq!(board.get(Pos::new(r, c)), 0);
            assert!(board.valid_pos(Pos::new(r, c)));
        }
    }
    assert!(!board.is_full());
}

#[test]
fn test_place_and_erase() {
    let mut board = Board::new(8, 8);
    let p = Pos::new(2, 5);

    board.place(p, Player::First);
    assert_eq!(board.get(p), 1);
    assert!(!board.valid_pos(p));
    assert!(board.on_board(p));

    board.erase(p);
    assert_eq!(board.get(p), 0);
    assert!(board.valid_pos(p));
}

#[test]
fn test_on_board_bounds() {
    let board = Board::new(8, 8);
    assert!(board.on_board(Pos::new(0, 0)));
    assert!(board.on_board(Pos::new(7, 7)));
    assert!(!board.on_board(Pos::new(-1, 0)));
    assert!(!board.on_board(Pos::new(0, -1)));
    assert!(!board.on_board(Pos::new(8, 0)));
    assert!(!board.on_board(Pos::new(0, 8)));
}

#[test]
fn test_rectangular_board() {
    let board = Board::new(3, 5);
    assert!(board.on_board(Pos::new(2, 4)));
    assert!(!board.on_board(Pos::new(4, 2)));
}

#[test]
fn test_clone_is_deep() {
    let mut board = Board::new(8, 8);
    board.place(Pos::new(1, 1), Player::First);

    let mut copy = board.clone();
    copy.place(Pos::new(6, 6), Player::Second);
    copy.erase(Pos::new(1, 1));

    assert_eq!(board.get(Pos::new(1, 1)), 1);
    assert_eq!(board.get(Pos::new(6, 6)), 0);
}

#[test]
fn test_equality_covers_every_cell() {
    let mut a = Board::new(8, 8);
    let mut b = Board::new(8, 8);
    assert_eq!(a, b);

    a.place(Pos::new(3, 3), Player::First);
    assert_ne!(a, b);

    b.place(Pos::new(3, 3), Player::First);
    assert_eq!(a, b);

    b.place(Pos::new(3, 4), Player::Second);
    assert_ne!(a, b);
}

#[test]
fn test_equality_covers_dimensions() {
    // Same (empty) cell contents, different shape
    assert_ne!(Board::new(4, 8), Board::new(8, 4));
    assert_ne!(Board::new(8, 8), Board::new(8, 4));
}

#[test]
fn test_equal_boards_hash_equal() {
    let mut a = Board::new(8, 8);
    let mut b = Board::new(8, 8);
    a.place(Pos::new(3, 3), Player::First);
    a.place(Pos::new(4, 4), Player::Second);
    b.place(Pos::new(4, 4), Player::Second);
    b.place(Pos::new(3, 3), Player::First);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_different_occupants_hash_differently() {
    // Not guaranteed in general, but a sanity check against degenerate
    // hashing of the cell buffer.
    let mut a = Board::new(8, 8);
    let mut b = Board::new(8, 8);
    a.place(Pos::new(3, 3), Player::First);
    b.place(Pos::new(3, 3), Player::Second);
    assert_ne!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2, 2);
    let cells = [(0, 0), (0, 1), (1, 0), (1, 1)];
    for (i, &(r, c)) in cells.iter().enumerate() {
        assert!(!board.is_full());
        let player = if i % 2 == 0 { Player::First } else { Player::Second };
        board.place(Pos::new(r, c), player);
    }
    assert!(board.is_full());
}

#[test]
fn test_display_renders_grid() {
    let mut board = Board::new(3, 3);
    board.place(Pos::new(0, 0), Player::First);
    board.place(Pos::new(1, 1), Player::Second);

    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "X . .");
    assert_eq!(lines[1], ". O .");
    assert_eq!(lines[2], ". . .");
}
