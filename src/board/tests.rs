use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::PlayerOne.opponent(), Stone::PlayerTwo);
    assert_eq!(Stone::PlayerTwo.opponent(), Stone::PlayerOne);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_cell_values() {
    assert_eq!(Stone::from_cell(0), Some(Stone::Empty));
    assert_eq!(Stone::from_cell(1), Some(Stone::PlayerOne));
    assert_eq!(Stone::from_cell(2), Some(Stone::PlayerTwo));
    assert_eq!(Stone::from_cell(3), None);
    assert_eq!(Stone::PlayerTwo.to_cell(), 2);

    assert_eq!(Stone::from_player_id(0), None);
    assert_eq!(Stone::from_player_id(1), Some(Stone::PlayerOne));
    assert_eq!(Stone::from_player_id(7), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);
    assert_eq!(Pos::from_index(112), pos);
    assert_eq!(Pos::CENTER, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset(-1, 0, 1), None);
    assert_eq!(pos.offset(0, 1, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
}

#[test]
fn test_iter_ones_is_row_major() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(14, 14));
    bb.set(Pos::new(3, 9));
    bb.set(Pos::new(3, 2));
    bb.set(Pos::new(8, 0));

    let cells: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(
        cells,
        vec![Pos::new(3, 2), Pos::new(3, 9), Pos::new(8, 0), Pos::new(14, 14)]
    );
    assert_eq!(bb.count(), 4);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place_stone(Pos::new(4, 5), Stone::PlayerTwo);
    assert_eq!(board.get(Pos::new(4, 5)), Stone::PlayerTwo);
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(Pos::new(4, 5));
    assert!(board.is_empty(Pos::new(4, 5)));
    assert!(board.is_board_empty());
}

#[test]
fn test_trial_stone_restores_cell() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 7), Stone::PlayerOne);
    let before = board.clone();

    {
        let trial = board.trial(Pos::new(7, 8), Stone::PlayerTwo);
        assert_eq!(trial.get(Pos::new(7, 8)), Stone::PlayerTwo);
        assert_eq!(trial.stone_count(), 2);
    }

    assert_eq!(board, before);
}

#[test]
fn test_nested_trials_restore_in_order() {
    let mut board = Board::new();
    {
        let mut outer = board.trial(Pos::new(0, 0), Stone::PlayerOne);
        {
            let inner = outer.trial(Pos::new(0, 1), Stone::PlayerTwo);
            assert_eq!(inner.stone_count(), 2);
        }
        assert_eq!(outer.stone_count(), 1);
    }
    assert!(board.is_board_empty());
}

#[test]
fn test_grid_round_trip() {
    let mut grid = vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE];
    grid[0][0] = 1;
    grid[7][8] = 2;
    grid[14][3] = 1;

    let board = Board::from_grid(&grid).unwrap();
    assert_eq!(board.get(Pos::new(0, 0)), Stone::PlayerOne);
    assert_eq!(board.get(Pos::new(7, 8)), Stone::PlayerTwo);
    assert_eq!(board.stone_count(), 3);
    assert_eq!(board.to_grid(), grid);
}

#[test]
fn test_grid_rejects_bad_shapes() {
    let short = vec![vec![0u8; BOARD_SIZE]; 14];
    assert_eq!(Board::from_grid(&short), Err(BoardError::RowCount(14)));

    let mut ragged = vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE];
    ragged[3] = vec![0; 16];
    assert_eq!(
        Board::from_grid(&ragged),
        Err(BoardError::RowLength { row: 3, len: 16 })
    );

    let mut bad_cell = vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE];
    bad_cell[2][5] = 3;
    let expected = BoardError::InvalidCell {
        row: 2,
        col: 5,
        value: 3,
    };
    assert_eq!(Board::from_grid(&bad_cell), Err(expected));
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        let stone = if idx % 2 == 0 {
            Stone::PlayerOne
        } else {
            Stone::PlayerTwo
        };
        board.place_stone(Pos::from_index(idx), stone);
    }
    assert!(board.is_full());
    assert_eq!(board.occupied().count(), 225);
}
