use salvo::{
    AttackError, Board, CellSymbol, ConfigError, Coordinate, Orientation, PlacementError, Ship,
    ShotResult, FLEET,
};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

fn destroyer_board() -> Board {
    let mut board = Board::new(10).unwrap();
    board
        .place_ship(Ship::new(2, "Destroyer").unwrap(), at(0, 0), Orientation::Horizontal)
        .unwrap();
    board
}

#[test]
fn test_grid_size_range() {
    assert_eq!(Board::new(9).unwrap_err(), ConfigError::InvalidGridSize(9));
    assert_eq!(Board::new(16).unwrap_err(), ConfigError::InvalidGridSize(16));
    assert_eq!(Board::new(15).unwrap().size(), 15);
}

#[test]
fn test_place_destroyer_occupies_cells() {
    let board = destroyer_board();
    let ship = &board.ships()[0];
    let cells: Vec<_> = ship.coordinates().iter().copied().collect();
    assert_eq!(cells, vec![at(0, 0), at(0, 1)]);
    assert_eq!(board.ship_map().count_ones(), 2);
}

#[test]
fn test_diagonal_neighbour_rejected() {
    let mut board = destroyer_board();
    let err = board
        .place_ship(Ship::new(2, "Patrol").unwrap(), at(1, 2), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, PlacementError::Adjacent);
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ship_map().count_ones(), 2);

    // one cell further away is fine
    board
        .place_ship(Ship::new(2, "Patrol").unwrap(), at(2, 2), Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_validation_order() {
    let mut board = Board::new(10).unwrap();
    board
        .place_ship(Ship::new(2, "Destroyer").unwrap(), at(8, 0), Orientation::Vertical)
        .unwrap();
    // runs off the grid and would also overlap: bounds come first
    assert_eq!(
        board.place_ship(Ship::new(5, "Carrier").unwrap(), at(7, 0), Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );

    let mut board = destroyer_board();
    assert_eq!(
        board.place_ship(Ship::new(5, "Carrier").unwrap(), at(0, 1), Orientation::Horizontal),
        Err(PlacementError::Overlap)
    );
    assert_eq!(
        board.place_ship(Ship::new(5, "Carrier").unwrap(), at(0, 6), Orientation::Horizontal),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        board.place_ship(Ship::new(3, "Cruiser").unwrap(), at(8, 9), Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        board.place_ship(Ship::new(2, "Sub").unwrap(), at(10, 0), Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );
}

#[test]
fn test_same_ship_twice_rejected() {
    let mut board = destroyer_board();
    assert_eq!(
        board.place_ship(Ship::new(2, "Destroyer").unwrap(), at(5, 5), Orientation::Horizontal),
        Err(PlacementError::AlreadyPlaced)
    );
}

#[test]
fn test_attack_hit_then_sink() {
    let mut board = destroyer_board();
    assert_eq!(board.receive_attack(at(0, 0)), Ok(ShotResult::Hit));
    assert!(!board.all_sunk());
    assert_eq!(board.receive_attack(at(0, 1)), Ok(ShotResult::Sunk("Destroyer")));
    assert!(board.all_sunk());
}

#[test]
fn test_attack_errors() {
    let mut board = destroyer_board();
    assert_eq!(board.receive_attack(at(5, 5)), Ok(ShotResult::Miss));
    assert_eq!(board.receive_attack(at(5, 5)), Err(AttackError::DuplicateShot));
    assert_eq!(board.receive_attack(at(0, 10)), Err(AttackError::OutOfBounds));

    assert_eq!(board.receive_attack(at(0, 0)), Ok(ShotResult::Hit));
    assert_eq!(board.receive_attack(at(0, 0)), Err(AttackError::DuplicateShot));
    assert_eq!(board.ships()[0].hits().len(), 1);
    assert_eq!(board.shots().count_ones(), 2);
    assert_eq!(board.misses().collect::<Vec<_>>(), vec![at(5, 5)]);
}

#[test]
fn test_empty_fleet_is_not_sunk() {
    let board = Board::new(10).unwrap();
    assert!(!board.all_sunk());
}

#[test]
fn test_full_fleet_fits_by_hand() {
    let mut board = Board::new(10).unwrap();
    for (i, def) in FLEET.iter().enumerate() {
        board
            .place_ship(def.build().unwrap(), at(i * 2, 0), Orientation::Horizontal)
            .unwrap();
    }
    assert_eq!(board.ship_map().count_ones(), salvo::TOTAL_SHIP_CELLS);
}

#[test]
fn test_render_symbols() {
    let mut board = destroyer_board();
    board.receive_attack(at(0, 0)).unwrap();
    board.receive_attack(at(3, 3)).unwrap();

    let revealed = board.render(true);
    assert_eq!(revealed.get(0, 0), Some(CellSymbol::Hit));
    assert_eq!(revealed.get(0, 1), Some(CellSymbol::Ship));
    assert_eq!(revealed.get(3, 3), Some(CellSymbol::Miss));
    assert_eq!(revealed.get(9, 9), Some(CellSymbol::Empty));
    assert_eq!(revealed.get(10, 0), None);

    let hidden = board.render(false);
    assert_eq!(hidden.get(0, 0), Some(CellSymbol::Hit));
    assert_eq!(hidden.get(0, 1), Some(CellSymbol::Empty));
}

#[test]
fn test_render_text_layout() {
    let mut board = destroyer_board();
    board.receive_attack(at(0, 1)).unwrap();
    board.receive_attack(at(1, 0)).unwrap();
    let text = board.render(true).to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "    0  1  2  3  4  5  6  7  8  9");
    assert_eq!(lines[1], " 0 S X . . . . . . . .");
    assert_eq!(lines[2], " 1 O . . . . . . . . .");
}
