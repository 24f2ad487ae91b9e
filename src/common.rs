//! Common types: coordinates, parties, attack outcomes and error kinds.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A cell on the grid, 0-indexed as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the coordinate lies within an `size`×`size` grid.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Chebyshev (king-move) distance between two cells.
    pub fn chebyshev(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// The up to eight in-bounds cells touching this one, diagonals included.
    pub fn neighbors(&self, size: usize) -> impl Iterator<Item = Coordinate> + '_ {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc, size))
    }

    /// In-bounds orthogonal neighbours in the order up, down, left, right.
    pub fn orthogonal_neighbors(&self, size: usize) -> impl Iterator<Item = Coordinate> + '_ {
        const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc, size))
    }

    fn offset(&self, dr: isize, dc: isize, size: usize) -> Option<Coordinate> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let c = Coordinate::new(row, col);
        c.in_bounds(size).then_some(c)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Party {
    One,
    Two,
}

impl Party {
    /// The opposing party.
    pub const fn other(self) -> Party {
        match self {
            Party::One => Party::Two,
            Party::Two => Party::One,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Party::One => 0,
            Party::Two => 1,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::One => write!(f, "Player 1"),
            Party::Two => write!(f, "Player 2"),
        }
    }
}

/// Result of a shot resolved by a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact cell of the named ship.
    Sunk(&'static str),
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Result of a valid attack as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackOutcome {
    Miss,
    Hit,
    HitAndSunk(&'static str),
    /// The shot sank the last ship of the opposing fleet.
    HitAndWon,
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackOutcome::Miss => write!(f, "Miss!"),
            AttackOutcome::Hit => write!(f, "Hit!"),
            AttackOutcome::HitAndSunk(name) => write!(f, "Hit! You sunk the {}!", name),
            AttackOutcome::HitAndWon => write!(f, "Hit! The last ship went down!"),
        }
    }
}

/// Reasons a ship placement is rejected. The board is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some cell of the ship falls outside the grid.
    OutOfBounds,
    /// Some cell is already occupied by another ship.
    Overlap,
    /// Some cell touches another ship, diagonals included.
    Adjacent,
    /// Coordinates are not a straight contiguous run of the ship's size.
    InvalidGeometry,
    /// The ship, or its fleet entry, has already been placed.
    AlreadyPlaced,
    /// The ship is not part of the fleet.
    UnknownShip,
    /// The other party is still placing its fleet.
    NotYourTurn,
    /// Play has started; fleets are frozen.
    SetupClosed,
    /// The game has finished.
    GameOver,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "Ship placement overlaps with another ship"),
            PlacementError::Adjacent => write!(f, "Ships cannot touch, not even diagonally"),
            PlacementError::InvalidGeometry => write!(f, "Ship cells must form a straight line"),
            PlacementError::AlreadyPlaced => write!(f, "Ship is already placed on the board"),
            PlacementError::UnknownShip => write!(f, "Ship is not part of the fleet"),
            PlacementError::NotYourTurn => write!(f, "The other player is placing ships"),
            PlacementError::SetupClosed => write!(f, "Ships can no longer be placed"),
            PlacementError::GameOver => write!(f, "The game is over"),
        }
    }
}

/// Reasons an attack is rejected. No state changes and the turn does not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already fired upon.
    DuplicateShot,
    /// It is the other party's turn.
    NotYourTurn,
    /// Fleets are still being placed.
    SetupIncomplete,
    /// The game has finished.
    GameOver,
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::OutOfBounds => write!(f, "Attack position is out of bounds"),
            AttackError::DuplicateShot => write!(f, "That position was already attacked"),
            AttackError::NotYourTurn => write!(f, "It is not your turn"),
            AttackError::SetupIncomplete => write!(f, "Ships are still being placed"),
            AttackError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl From<BitBoardError> for PlacementError {
    fn from(_: BitBoardError) -> Self {
        PlacementError::OutOfBounds
    }
}

impl From<BitBoardError> for AttackError {
    fn from(_: BitBoardError) -> Self {
        AttackError::OutOfBounds
    }
}

/// Errors raised while placing a whole fleet automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// No legal position remained for the named ship.
    SetupImpossible { ship: &'static str },
    /// The engine refused the placement request itself.
    Placement(PlacementError),
}

impl From<PlacementError> for SetupError {
    fn from(err: PlacementError) -> Self {
        SetupError::Placement(err)
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::SetupImpossible { ship } => {
                write!(f, "No room left on the grid for the {}", ship)
            }
            SetupError::Placement(e) => write!(f, "Placement rejected: {}", e),
        }
    }
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid size outside the supported range.
    InvalidGridSize(usize),
    /// Underlying bitboard could not hold the grid.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for ConfigError {
    fn from(err: BitBoardError) -> Self {
        ConfigError::BitBoard(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridSize(n) => write!(
                f,
                "Grid size {} is not between {} and {}",
                n,
                crate::config::MIN_GRID_SIZE,
                crate::config::MAX_GRID_SIZE
            ),
            ConfigError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for AttackError {}
#[cfg(feature = "std")]
impl std::error::Error for SetupError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
