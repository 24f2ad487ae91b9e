//! Commonly used types and utilities for ease of import.

pub use crate::{
    new_game, play_match, AttackError, AttackOutcome, ComputerPlayer, Coordinate, GameEngine,
    Party, Phase, PlacementError, Player, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
