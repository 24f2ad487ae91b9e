use rand::rngs::SmallRng;

use crate::{
    ai::{PlacementStrategy, RandomPlacementStrategy, TargetView},
    board::{Board, RenderedGrid},
    common::{
        AttackError, AttackOutcome, ConfigError, Coordinate, Party, PlacementError, SetupError,
        ShotResult,
    },
    config::{fleet_ship, GameConfig, FLEET},
    ship::{Orientation, ShipType},
};

/// Coarse phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    Setup,
    Playing,
    Finished,
}

/// Full state, including whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Setup { placing: Party },
    Playing { active: Party },
    Finished { winner: Party },
}

impl GameState {
    pub fn phase(&self) -> Phase {
        match self {
            GameState::Setup { .. } => Phase::Setup,
            GameState::Playing { .. } => Phase::Playing,
            GameState::Finished { .. } => Phase::Finished,
        }
    }
}

/// Owns both boards and enforces setup order, turn order and the win rule.
pub struct GameEngine {
    config: GameConfig,
    boards: [Board; 2],
    state: GameState,
    shots_fired: [usize; 2],
}

/// Start a game on a `grid_size`×`grid_size` grid.
pub fn new_game(grid_size: usize, two_player: bool) -> Result<GameEngine, ConfigError> {
    GameEngine::new(GameConfig::new(grid_size, two_player)?)
}

impl GameEngine {
    /// Create an engine with two empty boards; party one places first.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let size = config.grid_size();
        Ok(Self {
            config,
            boards: [Board::new(size)?, Board::new(size)?],
            state: GameState::Setup { placing: Party::One },
            shots_fired: [0; 2],
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn winner(&self) -> Option<Party> {
        match self.state {
            GameState::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Party expected to place ships, during setup.
    pub fn placing_party(&self) -> Option<Party> {
        match self.state {
            GameState::Setup { placing } => Some(placing),
            _ => None,
        }
    }

    /// Party expected to attack, during play.
    pub fn active_party(&self) -> Option<Party> {
        match self.state {
            GameState::Playing { active } => Some(active),
            _ => None,
        }
    }

    /// Immutable reference to a party's own board.
    pub fn board(&self, party: Party) -> &Board {
        &self.boards[party.index()]
    }

    /// What `party` can see of its opponent's board.
    pub fn target_view(&self, party: Party) -> TargetView {
        TargetView::of(self.board(party.other()))
    }

    /// Valid attacks made by `party` so far.
    pub fn shots_fired(&self, party: Party) -> usize {
        self.shots_fired[party.index()]
    }

    /// Fleet entries `party` has yet to place.
    pub fn unplaced_ships(&self, party: Party) -> impl Iterator<Item = ShipType> + '_ {
        let board = self.board(party);
        FLEET.iter().copied().filter(move |s| !board.has_ship(s.name()))
    }

    /// Ships of `party` still afloat.
    pub fn remaining_ships(&self, party: Party) -> usize {
        self.board(party).ships_afloat()
    }

    fn check_placer(&self, party: Party) -> Result<(), PlacementError> {
        match self.state {
            GameState::Setup { placing } if placing == party => Ok(()),
            GameState::Setup { .. } => Err(PlacementError::NotYourTurn),
            GameState::Playing { .. } => Err(PlacementError::SetupClosed),
            GameState::Finished { .. } => Err(PlacementError::GameOver),
        }
    }

    /// Place one fleet ship for the party currently placing.
    pub fn place_ship(
        &mut self,
        party: Party,
        ship_type: ShipType,
        anchor: Coordinate,
        horizontal: bool,
    ) -> Result<(), PlacementError> {
        self.check_placer(party)?;
        // Name and length must both match a fleet entry.
        if fleet_ship(ship_type.name()) != Some(ship_type) {
            return Err(PlacementError::UnknownShip);
        }
        let orientation = Orientation::from_horizontal(horizontal);
        self.boards[party.index()].place_ship(ship_type.build()?, anchor, orientation)?;
        log::debug!(
            "{} placed {} at {} {:?}",
            party,
            ship_type.name(),
            anchor,
            orientation
        );
        self.advance_setup();
        Ok(())
    }

    /// Place all of `party`'s remaining ships at random.
    pub fn auto_place_fleet(&mut self, party: Party, rng: &mut SmallRng) -> Result<(), SetupError> {
        self.auto_place_fleet_with(party, rng, &mut RandomPlacementStrategy::default())
    }

    /// Place all of `party`'s remaining ships with `strategy`.
    pub fn auto_place_fleet_with(
        &mut self,
        party: Party,
        rng: &mut SmallRng,
        strategy: &mut dyn PlacementStrategy,
    ) -> Result<(), SetupError> {
        self.check_placer(party)?;
        strategy.place_fleet(rng, &mut self.boards[party.index()], &FLEET)?;
        log::debug!("{} fleet placed automatically", party);
        self.advance_setup();
        Ok(())
    }

    fn fleet_complete(&self, party: Party) -> bool {
        let board = self.board(party);
        FLEET.iter().all(|s| board.has_ship(s.name()))
    }

    fn advance_setup(&mut self) {
        let GameState::Setup { placing } = self.state else {
            return;
        };
        if !self.fleet_complete(placing) {
            return;
        }
        if !self.fleet_complete(placing.other()) {
            self.state = GameState::Setup {
                placing: placing.other(),
            };
            log::info!("{} fleet ready, {} to place", placing, placing.other());
            return;
        }
        let first = self.config.first_mover();
        self.state = GameState::Playing { active: first };
        log::info!("both fleets ready, {} opens fire", first);
    }

    /// Fire at `coord` on the opponent's board on behalf of `party`.
    ///
    /// A rejected attack changes nothing and the turn does not pass. A valid
    /// one always hands the turn over, then ends the game if it sank the
    /// opponent's last ship.
    pub fn attack(&mut self, party: Party, coord: Coordinate) -> Result<AttackOutcome, AttackError> {
        match self.state {
            GameState::Setup { .. } => return Err(AttackError::SetupIncomplete),
            GameState::Finished { .. } => return Err(AttackError::GameOver),
            GameState::Playing { active } if active != party => {
                return Err(AttackError::NotYourTurn)
            }
            GameState::Playing { .. } => {}
        }
        let target = &mut self.boards[party.other().index()];
        let shot = target.receive_attack(coord)?;
        let defeated = target.all_sunk();

        self.shots_fired[party.index()] += 1;
        self.state = GameState::Playing {
            active: party.other(),
        };
        log::debug!("{} fired at {}: {:?}", party, coord, shot);

        if defeated {
            self.state = GameState::Finished { winner: party };
            log::info!("{} wins after {} shots", party, self.shots_fired(party));
            return Ok(AttackOutcome::HitAndWon);
        }
        Ok(match shot {
            ShotResult::Miss => AttackOutcome::Miss,
            ShotResult::Hit => AttackOutcome::Hit,
            ShotResult::Sunk(name) => AttackOutcome::HitAndSunk(name),
        })
    }

    /// Concede: the other party wins immediately.
    pub fn resign(&mut self, party: Party) -> Result<(), AttackError> {
        if matches!(self.state, GameState::Finished { .. }) {
            return Err(AttackError::GameOver);
        }
        self.state = GameState::Finished {
            winner: party.other(),
        };
        log::info!("{} resigned", party);
        Ok(())
    }

    /// Grid of `party`'s own board; intact ships appear only if `reveal_own`.
    pub fn render(&self, party: Party, reveal_own: bool) -> RenderedGrid {
        self.board(party).render(reveal_own)
    }
}
