//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - ComputerPlayer: random fleet layout plus hunt/target firing
//! - CliPlayer: Interactive command-line player
//!
//! [`play_match`] drives a full game between two players through the engine.

use core::fmt;

use rand::rngs::SmallRng;

use crate::{
    common::{AttackError, AttackOutcome, Coordinate, Party, SetupError},
    game::{GameEngine, GameState},
};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on its own board through the engine
/// - Selecting targets to attack
/// - Handling feedback from attacks
pub trait Player {
    /// Place the whole fleet for `party`. Called while `party` is placing.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        engine: &mut GameEngine,
        party: Party,
    ) -> Result<(), SetupError>;

    /// Choose the next cell to fire at. `None` concedes the game.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        engine: &GameEngine,
        party: Party,
    ) -> Option<Coordinate>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _coord: Coordinate, _outcome: AttackOutcome) {}

    /// Inform the player that its chosen target was rejected.
    fn handle_attack_error(&mut self, _coord: Coordinate, _err: AttackError) {}

    /// Inform the player of an opponent attack against its board.
    fn handle_opponent_attack(&mut self, _coord: Coordinate, _outcome: AttackOutcome) {}
}

pub mod ai;
pub use ai::ComputerPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{CliPlayer, LineInput};

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: Party,
    /// The loser conceded instead of losing the last ship.
    pub resigned: bool,
    pub shots_one: usize,
    pub shots_two: usize,
}

/// Unrecoverable failure while driving a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    Setup(SetupError),
    Attack(AttackError),
}

impl From<SetupError> for MatchError {
    fn from(err: SetupError) -> Self {
        MatchError::Setup(err)
    }
}

impl From<AttackError> for MatchError {
    fn from(err: AttackError) -> Self {
        MatchError::Attack(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Setup(e) => write!(f, "setup failed: {}", e),
            MatchError::Attack(e) => write!(f, "attack failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// Let `party` take one turn. Rejected targets (off-grid or repeated) are
/// reported back to the player, who is asked again for as long as it keeps
/// answering. Returns `None` if the player conceded.
pub fn play_turn(
    engine: &mut GameEngine,
    party: Party,
    player: &mut dyn Player,
    rng: &mut SmallRng,
) -> Result<Option<(Coordinate, AttackOutcome)>, AttackError> {
    loop {
        let Some(coord) = player.select_target(rng, engine, party) else {
            return Ok(None);
        };
        match engine.attack(party, coord) {
            Ok(outcome) => return Ok(Some((coord, outcome))),
            Err(e @ (AttackError::OutOfBounds | AttackError::DuplicateShot)) => {
                player.handle_attack_error(coord, e);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Run setup for both parties, then alternate turns until someone wins or
/// concedes.
pub fn play_match<'p>(
    engine: &mut GameEngine,
    one: &mut (dyn Player + 'p),
    two: &mut (dyn Player + 'p),
    rng: &mut SmallRng,
) -> Result<MatchSummary, MatchError> {
    while let Some(placing) = engine.placing_party() {
        match placing {
            Party::One => one.place_ships(rng, engine, Party::One)?,
            Party::Two => two.place_ships(rng, engine, Party::Two)?,
        }
        if engine.placing_party() == Some(placing) {
            // The player returned without finishing its fleet.
            engine.auto_place_fleet(placing, rng)?;
        }
    }

    let mut resigned = false;
    while let GameState::Playing { active } = engine.state() {
        let (attacker, defender) = match active {
            Party::One => (&mut *one, &mut *two),
            Party::Two => (&mut *two, &mut *one),
        };
        match play_turn(engine, active, attacker, rng)? {
            Some((coord, outcome)) => {
                attacker.handle_attack_result(coord, outcome);
                defender.handle_opponent_attack(coord, outcome);
            }
            None => {
                engine.resign(active)?;
                resigned = true;
            }
        }
    }

    let winner = engine.winner().ok_or(MatchError::Attack(AttackError::SetupIncomplete))?;
    Ok(MatchSummary {
        winner,
        resigned,
        shots_one: engine.shots_fired(Party::One),
        shots_two: engine.shots_fired(Party::Two),
    })
}
