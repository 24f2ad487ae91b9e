#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod ship;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, Cells, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
pub use player::{play_match, play_turn, ComputerPlayer, MatchError, MatchSummary, Player};
#[cfg(feature = "std")]
pub use player::{CliPlayer, LineInput};
pub use ship::*;
