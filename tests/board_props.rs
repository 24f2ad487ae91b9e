use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use salvo::{
    AttackError, Board, Coordinate, Orientation, PlacementStrategy, RandomPlacementStrategy,
    Ship, FLEET,
};

fn random_board(seed: u64, size: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    RandomPlacementStrategy::default()
        .place_fleet(&mut rng, &mut board, &FLEET)
        .unwrap();
    board
}

fn min_distance(a: &Ship, b: &Ship) -> usize {
    a.coordinates()
        .iter()
        .flat_map(|x| b.coordinates().iter().map(move |y| x.chebyshev(y)))
        .min()
        .unwrap()
}

fn assert_ships_apart(board: &Board) -> Result<(), TestCaseError> {
    let ships = board.ships();
    for i in 0..ships.len() {
        for j in i + 1..ships.len() {
            prop_assert!(
                min_distance(&ships[i], &ships[j]) >= 2,
                "{} touches {}",
                ships[i].name(),
                ships[j].name()
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_ships_never_touch(seed in any::<u64>(), size in 10usize..=15) {
        let board = random_board(seed, size);
        prop_assert_eq!(board.ships().len(), FLEET.len());
        assert_ships_apart(&board)?;
    }

    #[test]
    fn arbitrary_placements_keep_ships_apart(seed in any::<u64>(), tries in 1usize..60) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(10).unwrap();
        const NAMES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];
        for _ in 0..tries {
            let name = NAMES[rng.random_range(0..NAMES.len())];
            let len = rng.random_range(1..=5);
            let anchor = Coordinate::new(rng.random_range(0..12), rng.random_range(0..12));
            let orient = if rng.random() { Orientation::Horizontal } else { Orientation::Vertical };
            let before = board.ships().to_vec();
            let map_before = board.ship_map();
            if board.place_ship(Ship::new(len, name).unwrap(), anchor, orient).is_err() {
                prop_assert_eq!(board.ships(), &before[..]);
                prop_assert_eq!(board.ship_map(), map_before);
            }
        }
        assert_ships_apart(&board)?;
    }

    #[test]
    fn duplicate_shot_changes_nothing(seed in any::<u64>(), row in 0usize..10, col in 0usize..10) {
        let mut board = random_board(seed, 10);
        let target = Coordinate::new(row, col);
        board.receive_attack(target).unwrap();
        let ships = board.ships().to_vec();
        let shots = board.shots();
        prop_assert_eq!(board.receive_attack(target), Err(AttackError::DuplicateShot));
        prop_assert_eq!(board.ships(), &ships[..]);
        prop_assert_eq!(board.shots(), shots);
    }

    #[test]
    fn hits_grow_and_sunk_iff_fully_hit(seed in any::<u64>(), shots in 1usize..150) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(seed ^ 0x5eed, 10);
        let mut prev: Vec<usize> = board.ships().iter().map(|s| s.hits().len()).collect();
        for _ in 0..shots {
            let target = Coordinate::new(rng.random_range(0..10), rng.random_range(0..10));
            let _ = board.receive_attack(target);
            for (i, ship) in board.ships().iter().enumerate() {
                prop_assert!(ship.hits().is_subset(ship.coordinates()));
                prop_assert!(ship.hits().len() >= prev[i]);
                prop_assert_eq!(ship.is_sunk(), ship.hits() == ship.coordinates());
                prev[i] = ship.hits().len();
            }
            let all = board.ships().iter().all(|s| s.is_sunk());
            prop_assert_eq!(board.all_sunk(), all);
        }
    }
}
