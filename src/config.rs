use crate::common::{ConfigError, Party};
use crate::ship::ShipType;

pub const MIN_GRID_SIZE: usize = 10;
pub const MAX_GRID_SIZE: usize = 15;
pub const DEFAULT_GRID_SIZE: usize = MIN_GRID_SIZE;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random anchors tried per ship before falling back to exhaustive search.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Times a whole fleet is re-laid from scratch before setup is declared impossible.
pub const FLEET_RESTARTS: usize = 3;

/// Look up a fleet entry by name.
pub fn fleet_ship(name: &str) -> Option<ShipType> {
    FLEET.iter().copied().find(|def| def.name() == name)
}

/// Symbols used when rendering a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellSymbol {
    /// Open water, or a cell whose content is unknown to the viewer.
    Empty,
    /// Intact ship segment, shown on a revealed board only.
    Ship,
    Hit,
    Miss,
}

impl CellSymbol {
    pub const fn as_char(self) -> char {
        match self {
            CellSymbol::Empty => '.',
            CellSymbol::Ship => 'S',
            CellSymbol::Hit => 'X',
            CellSymbol::Miss => 'O',
        }
    }
}

/// Parameters fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    grid_size: usize,
    two_player: bool,
    first_mover: Party,
}

impl GameConfig {
    /// Validate the grid size; party one places first and opens play.
    pub fn new(grid_size: usize, two_player: bool) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(ConfigError::InvalidGridSize(grid_size));
        }
        Ok(Self {
            grid_size,
            two_player,
            first_mover: Party::One,
        })
    }

    /// Override which party fires the first shot.
    pub fn with_first_mover(mut self, party: Party) -> Self {
        self.first_mover = party;
        self
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// False when party two is the computer.
    pub fn two_player(&self) -> bool {
        self.two_player
    }

    pub fn first_mover(&self) -> Party {
        self.first_mover
    }
}
