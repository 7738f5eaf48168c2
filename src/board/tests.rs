use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}

#[test]
fn test_mark_for_move_parity() {
    assert_eq!(Mark::for_move(0), Mark::X);
    assert_eq!(Mark::for_move(1), Mark::O);
    assert_eq!(Mark::for_move(2), Mark::X);
    assert_eq!(Mark::for_move(9), Mark::O);
}

#[test]
fn test_cell_mark_conversion() {
    assert_eq!(Cell::from(Mark::X), Cell::X);
    assert_eq!(Cell::from(Mark::O), Cell::O);
    assert_eq!(Cell::X.mark(), Some(Mark::X));
    assert_eq!(Cell::O.mark(), Some(Mark::O));
    assert_eq!(Cell::Empty.mark(), None);
    assert_eq!(Cell::default(), Cell::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.cells().iter().all(|c| c.is_empty()));
    assert_eq!(board.mark_count(), 0);
    assert_eq!(board, Board::default());
}

#[test]
fn test_with_cell_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_cell(4, Mark::X);

    assert_eq!(board.get(4), Some(Cell::Empty));
    assert_eq!(next.get(4), Some(Cell::X));
    for i in (0..TOTAL_CELLS).filter(|&i| i != 4) {
        assert_eq!(next.get(i), board.get(i));
    }
}

#[test]
fn test_get_out_of_range() {
    let board = Board::new();
    assert_eq!(board.get(9), None);
    assert!(!board.is_empty(9));
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for i in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        board = board.with_cell(i, Mark::for_move(i));
    }
    assert!(board.is_full());
}
