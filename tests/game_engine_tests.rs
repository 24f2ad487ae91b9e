use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    new_game, AttackError, AttackOutcome, CellSymbol, ConfigError, Coordinate, GameConfig,
    GameEngine, GameState, Party, Phase, PlacementError, ShipType, FLEET,
};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Lay each fleet ship horizontally at column 0 on rows 0, 2, 4, 6, 8.
fn place_rows(engine: &mut GameEngine, party: Party) {
    for (i, ship) in FLEET.iter().enumerate() {
        engine.place_ship(party, *ship, at(2 * i, 0), true).unwrap();
    }
}

fn ready_engine() -> GameEngine {
    let mut engine = new_game(10, false).unwrap();
    place_rows(&mut engine, Party::One);
    place_rows(&mut engine, Party::Two);
    engine
}

/// Every ship cell of the row layout.
fn fleet_cells() -> Vec<Coordinate> {
    FLEET
        .iter()
        .enumerate()
        .flat_map(|(i, ship)| (0..ship.length()).map(move |c| at(2 * i, c)))
        .collect()
}

#[test]
fn test_new_game_rejects_bad_sizes() {
    assert!(matches!(new_game(9, false), Err(ConfigError::InvalidGridSize(9))));
    assert!(matches!(new_game(16, true), Err(ConfigError::InvalidGridSize(16))));
    let engine = new_game(15, true).unwrap();
    assert_eq!(engine.config().grid_size(), 15);
    assert!(engine.config().two_player());
}

#[test]
fn test_setup_order() {
    let mut engine = new_game(10, false).unwrap();
    assert_eq!(engine.phase(), Phase::Setup);
    assert_eq!(engine.placing_party(), Some(Party::One));
    assert_eq!(engine.unplaced_ships(Party::One).count(), FLEET.len());

    assert_eq!(
        engine.place_ship(Party::Two, FLEET[0], at(0, 0), true),
        Err(PlacementError::NotYourTurn)
    );

    place_rows(&mut engine, Party::One);
    assert_eq!(engine.placing_party(), Some(Party::Two));
    assert_eq!(engine.unplaced_ships(Party::One).count(), 0);
    assert_eq!(
        engine.place_ship(Party::One, FLEET[0], at(0, 0), true),
        Err(PlacementError::NotYourTurn)
    );

    place_rows(&mut engine, Party::Two);
    assert_eq!(engine.state(), GameState::Playing { active: Party::One });
    assert_eq!(
        engine.place_ship(Party::One, FLEET[0], at(0, 0), true),
        Err(PlacementError::SetupClosed)
    );
}

#[test]
fn test_fleet_rules_during_setup() {
    let mut engine = new_game(10, false).unwrap();
    assert_eq!(
        engine.place_ship(Party::One, ShipType::new("Rowboat", 1), at(0, 0), true),
        Err(PlacementError::UnknownShip)
    );
    assert_eq!(
        engine.place_ship(Party::One, ShipType::new("Carrier", 4), at(0, 0), true),
        Err(PlacementError::UnknownShip)
    );
    engine.place_ship(Party::One, FLEET[4], at(0, 0), true).unwrap();
    assert_eq!(
        engine.place_ship(Party::One, FLEET[4], at(5, 5), true),
        Err(PlacementError::AlreadyPlaced)
    );
    assert_eq!(
        engine.place_ship(Party::One, FLEET[3], at(1, 2), false),
        Err(PlacementError::Adjacent)
    );
    assert_eq!(engine.board(Party::One).ships().len(), 1);
}

#[test]
fn test_attack_before_setup_completes() {
    let mut engine = new_game(10, false).unwrap();
    assert_eq!(
        engine.attack(Party::One, at(0, 0)),
        Err(AttackError::SetupIncomplete)
    );
}

#[test]
fn test_turns_alternate_on_valid_attacks_only() {
    let mut engine = ready_engine();
    assert_eq!(engine.attack(Party::Two, at(9, 9)), Err(AttackError::NotYourTurn));

    assert_eq!(engine.attack(Party::One, at(9, 9)), Ok(AttackOutcome::Miss));
    assert_eq!(engine.active_party(), Some(Party::Two));

    assert_eq!(engine.attack(Party::Two, at(10, 0)), Err(AttackError::OutOfBounds));
    assert_eq!(engine.active_party(), Some(Party::Two));

    assert_eq!(engine.attack(Party::Two, at(0, 0)), Ok(AttackOutcome::Hit));
    assert_eq!(engine.attack(Party::One, at(9, 9)), Err(AttackError::DuplicateShot));
    assert_eq!(engine.active_party(), Some(Party::One));

    assert_eq!(engine.shots_fired(Party::One), 1);
    assert_eq!(engine.shots_fired(Party::Two), 1);
}

#[test]
fn test_sinking_reports_the_ship() {
    let mut engine = ready_engine();
    // Destroyer sits on row 8, columns 0 and 1.
    engine.attack(Party::One, at(8, 0)).unwrap();
    engine.attack(Party::Two, at(9, 9)).unwrap();
    assert_eq!(
        engine.attack(Party::One, at(8, 1)),
        Ok(AttackOutcome::HitAndSunk("Destroyer"))
    );
    assert_eq!(engine.remaining_ships(Party::Two), FLEET.len() - 1);
}

#[test]
fn test_last_ship_wins_the_game() {
    let mut engine = ready_engine();
    let cells = fleet_cells();
    // Odd rows of the row layout are open water.
    let mut misses = (1..10).step_by(2).flat_map(|r| (0..10).map(move |c| at(r, c)));
    for (i, &cell) in cells.iter().enumerate() {
        let outcome = engine.attack(Party::One, cell).unwrap();
        if i + 1 == cells.len() {
            assert_eq!(outcome, AttackOutcome::HitAndWon);
        } else {
            assert!(outcome.is_hit());
            assert_ne!(outcome, AttackOutcome::HitAndWon);
            let miss = misses.next().unwrap();
            assert_eq!(engine.attack(Party::Two, miss), Ok(AttackOutcome::Miss));
        }
    }
    assert_eq!(engine.state(), GameState::Finished { winner: Party::One });
    assert_eq!(engine.winner(), Some(Party::One));
    assert_eq!(engine.remaining_ships(Party::Two), 0);
    assert_eq!(engine.attack(Party::Two, at(5, 5)), Err(AttackError::GameOver));
    assert_eq!(
        engine.place_ship(Party::One, FLEET[0], at(0, 0), true),
        Err(PlacementError::GameOver)
    );
}

#[test]
fn test_resign_hands_the_win_over() {
    let mut engine = ready_engine();
    engine.resign(Party::One).unwrap();
    assert_eq!(engine.winner(), Some(Party::Two));
    assert_eq!(engine.resign(Party::Two), Err(AttackError::GameOver));
}

#[test]
fn test_first_mover_is_configurable() {
    let config = GameConfig::new(10, true).unwrap().with_first_mover(Party::Two);
    let mut engine = GameEngine::new(config).unwrap();
    place_rows(&mut engine, Party::One);
    place_rows(&mut engine, Party::Two);
    assert_eq!(engine.active_party(), Some(Party::Two));
    assert_eq!(engine.attack(Party::One, at(0, 0)), Err(AttackError::NotYourTurn));
}

#[test]
fn test_auto_place_finishes_partial_fleet() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut engine = new_game(12, false).unwrap();
    engine.place_ship(Party::One, FLEET[0], at(0, 0), false).unwrap();
    engine.auto_place_fleet(Party::One, &mut rng).unwrap();
    assert!(engine.board(Party::One).ships()[0].contains(at(4, 0)));
    assert_eq!(engine.placing_party(), Some(Party::Two));
    engine.auto_place_fleet(Party::Two, &mut rng).unwrap();
    assert_eq!(engine.phase(), Phase::Playing);
}

#[test]
fn test_target_view_hides_ships() {
    let mut engine = ready_engine();
    engine.attack(Party::One, at(0, 0)).unwrap();
    engine.attack(Party::Two, at(9, 9)).unwrap();

    let view = engine.target_view(Party::One);
    assert!(view.is_attacked(at(0, 0)));
    assert!(!view.is_attacked(at(9, 9)));
    assert_eq!(view.hits().count_ones(), 1);

    let hidden = engine.render(Party::Two, false);
    assert_eq!(hidden.get(0, 0), Some(CellSymbol::Hit));
    assert_eq!(hidden.get(0, 1), Some(CellSymbol::Empty));

    let own = engine.render(Party::One, true);
    assert_eq!(own.get(9, 9), Some(CellSymbol::Miss));
    assert_eq!(own.get(0, 1), Some(CellSymbol::Ship));
}
