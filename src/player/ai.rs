use rand::rngs::SmallRng;

use crate::{
    ai::{HuntTargetStrategy, RandomPlacementStrategy, TargetingStrategy},
    common::{AttackOutcome, ConfigError, Coordinate, Party, SetupError},
    game::GameEngine,
};

use super::Player;

/// Computer opponent: random fleet layout, hunt/target firing.
pub struct ComputerPlayer {
    placement: RandomPlacementStrategy,
    targeting: HuntTargetStrategy,
}

impl ComputerPlayer {
    pub fn new(grid_size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            placement: RandomPlacementStrategy::default(),
            targeting: HuntTargetStrategy::new(grid_size)?,
        })
    }

    pub fn targeting(&self) -> &HuntTargetStrategy {
        &self.targeting
    }
}

impl Player for ComputerPlayer {
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        engine: &mut GameEngine,
        party: Party,
    ) -> Result<(), SetupError> {
        engine.auto_place_fleet_with(party, rng, &mut self.placement)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        engine: &GameEngine,
        party: Party,
    ) -> Option<Coordinate> {
        self.targeting
            .choose_coordinate(rng, &engine.target_view(party))
    }

    fn handle_attack_result(&mut self, coord: Coordinate, outcome: AttackOutcome) {
        self.targeting.record_outcome(coord, outcome);
    }
}
