use life_engine::Board;

static NEIGHBOURS_OF_CENTRE: [(usize, usize); 8] = [
    (1, 1), (1, 2), (1, 3),
    (2, 1),         (2, 3),
    (3, 1), (3, 2), (3, 3),
];

/// 5x5 board with the centre set to `centre_alive` and the first `n` of its
/// neighbours alive.
fn centre_with_neighbours(centre_alive: bool, n: usize) -> Board {
    let live = &NEIGHBOURS_OF_CENTRE[..n];
    Board::new(5, 5, move |row, col| {
        if (row, col) == (2, 2) { centre_alive } else { live.contains(&(row, col)) }
    })
}

#[test]
fn test_dead_cell_born_with_exactly_three() {
    for n in 0..=8 {
        let mut board = centre_with_neighbours(false, n);
        board.step();
        assert_eq!(board.get(2, 2), n == 3, "dead centre with {n} neighbours");
    }
}

#[test]
fn test_live_cell_survives_with_two_or_three() {
    for n in 0..=8 {
        let mut board = centre_with_neighbours(true, n);
        board.step();
        assert_eq!(board.get(2, 2), n == 2 || n == 3, "live centre with {n} neighbours");
    }
}

#[test]
fn test_full_board_dies_in_one_step() {
    // Every cell sees 8 live neighbours in the pre-step snapshot. An in-place
    // update would leave some of them with 2 or 3 and let them live.
    let mut board = Board::new(6, 7, |_, _| true);
    board.step();
    assert_eq!(board.population(), 0);
}

#[test]
fn test_block_is_still_life() {
    let block = [(3, 3), (3, 4), (4, 3), (4, 4)];
    let mut board = Board::new(10, 10, |row, col| block.contains(&(row, col)));
    let start = board.cells().to_vec();

    for generation in 1..=20 {
        board.step();
        assert_eq!(board.cells(), &start[..], "block changed at generation {generation}");
    }
}

#[test]
fn test_blinker_has_period_two() {
    let horizontal = [(1, 0), (1, 1), (1, 2)];
    let vertical = [(0, 1), (1, 1), (2, 1)];
    let mut board = Board::new(5, 5, |row, col| horizontal.contains(&(row, col)));
    let expected_vertical = Board::new(5, 5, |row, col| vertical.contains(&(row, col)));
    let expected_horizontal = board.cells().to_vec();

    board.step();
    assert_eq!(board.cells(), expected_vertical.cells());

    board.step();
    assert_eq!(board.cells(), &expected_horizontal[..]);
}

#[test]
fn test_single_cell_board_counts_itself() {
    // All eight offsets wrap onto the cell itself: 8 neighbours, so it dies.
    let mut alive = Board::new(1, 1, |_, _| true);
    alive.step();
    assert!(!alive.get(0, 0));

    let mut dead = Board::new(1, 1, |_, _| false);
    dead.step();
    assert!(!dead.get(0, 0));
}

#[test]
fn test_single_row_full_board_dies() {
    // Left and right neighbours are each counted three times, self twice.
    let mut board = Board::new(1, 5, |_, _| true);
    board.step();
    assert_eq!(board.population(), 0);
}
