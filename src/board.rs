//! One party's grid: ship placements, incoming shots and rendering.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Cells;
use crate::common::{AttackError, ConfigError, Coordinate, PlacementError, ShotResult};
use crate::config::{CellSymbol, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::ship::{HitEffect, Orientation, Ship, ShipType};

/// Main board state: ship placements, shots, hits.
#[derive(Clone)]
pub struct Board {
    size: usize,
    ships: Vec<Ship>,
    ship_map: Cells,
    shots: Cells,
    hits: Cells,
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed).
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(ConfigError::InvalidGridSize(size));
        }
        let empty = Cells::try_new(size)?;
        Ok(Board {
            size,
            ships: Vec::new(),
            ship_map: empty,
            shots: empty,
            hits: empty,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// True if a ship with this name is already on the board.
    pub fn has_ship(&self, name: &str) -> bool {
        self.ships.iter().any(|s| s.name() == name)
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> Cells {
        self.ship_map
    }

    /// Every cell fired upon so far.
    pub fn shots(&self) -> Cells {
        self.shots
    }

    /// Shots that struck a ship.
    pub fn hits(&self) -> Cells {
        self.hits
    }

    /// Shots that struck open water.
    pub fn misses(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.shots
            .iter_set_bits()
            .map(Coordinate::from)
            .filter(move |c| !self.hits.get(c.row, c.col).unwrap_or(false))
    }

    /// Number of ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when a non-empty fleet is entirely sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Check where `ship_type` would land from `anchor` without placing it.
    ///
    /// Rules are applied in order: every cell inside the grid, no cell
    /// occupied, and no cell touching (diagonals included) any ship already
    /// on the board. The covered cells are returned on success.
    pub fn check_placement(
        &self,
        ship_type: ShipType,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, PlacementError> {
        let cells = ship_type
            .layout(anchor, orientation)
            .ok_or(PlacementError::OutOfBounds)?;
        if cells.iter().any(|c| !c.in_bounds(self.size)) {
            return Err(PlacementError::OutOfBounds);
        }
        for c in &cells {
            if self.ship_map.get(c.row, c.col)? {
                return Err(PlacementError::Overlap);
            }
        }
        for c in &cells {
            for n in c.neighbors(self.size) {
                if self.ship_map.get(n.row, n.col)? {
                    return Err(PlacementError::Adjacent);
                }
            }
        }
        Ok(cells)
    }

    /// Place `ship` from `anchor` extending right (horizontal) or down.
    /// Validation completes before anything is written, so a rejected
    /// placement leaves the board untouched.
    pub fn place_ship(
        &mut self,
        mut ship: Ship,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if ship.is_placed() || self.has_ship(ship.name()) {
            return Err(PlacementError::AlreadyPlaced);
        }
        let cells = self.check_placement(ship.ship_type(), anchor, orientation)?;
        let mut ship_map = self.ship_map;
        for c in &cells {
            ship_map.set(c.row, c.col)?;
        }
        ship.assign_coordinates(&cells)?;
        self.ship_map = ship_map;
        self.ships.push(ship);
        Ok(())
    }

    /// Process a shot at `coord`, recording it and damaging any ship there.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<ShotResult, AttackError> {
        if !coord.in_bounds(self.size) {
            return Err(AttackError::OutOfBounds);
        }
        if self.shots.get(coord.row, coord.col)? {
            return Err(AttackError::DuplicateShot);
        }
        self.shots.set(coord.row, coord.col)?;

        if let Some(ship) = self.ships.iter_mut().find(|s| s.contains(coord)) {
            self.hits.set(coord.row, coord.col)?;
            return Ok(match ship.register_hit(coord) {
                HitEffect::Sunk => ShotResult::Sunk(ship.name()),
                HitEffect::Damaged | HitEffect::Ignored => ShotResult::Hit,
            });
        }
        Ok(ShotResult::Miss)
    }

    /// Symbol for a single cell. Intact ship cells show only when `reveal_ships`.
    pub fn cell_symbol(&self, coord: Coordinate, reveal_ships: bool) -> CellSymbol {
        let at = |bb: &Cells| bb.get(coord.row, coord.col).unwrap_or(false);
        if at(&self.hits) {
            CellSymbol::Hit
        } else if at(&self.shots) {
            CellSymbol::Miss
        } else if reveal_ships && at(&self.ship_map) {
            CellSymbol::Ship
        } else {
            CellSymbol::Empty
        }
    }

    /// Snapshot of the grid as symbols.
    pub fn render(&self, reveal_ships: bool) -> RenderedGrid {
        let mut cells = Vec::with_capacity(self.size * self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                cells.push(self.cell_symbol(Coordinate::new(row, col), reveal_ships));
            }
        }
        RenderedGrid {
            size: self.size,
            cells,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ship_map: {:?},\n  shots: {:?},\n  hits: {:?},\n  ships: {:?}\n}}",
            self.size, self.ship_map, self.shots, self.hits, self.ships
        )
    }
}

/// A rendered board: one symbol per cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RenderedGrid {
    size: usize,
    cells: Vec<CellSymbol>,
}

impl RenderedGrid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellSymbol> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Rows of symbols, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellSymbol]> {
        self.cells.chunks(self.size)
    }
}

/// Column indices across the top, each row prefixed with its index.
impl fmt::Display for RenderedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.size {
            write!(f, " {:2}", c)?;
        }
        for (r, row) in self.rows().enumerate() {
            writeln!(f)?;
            write!(f, "{:2}", r)?;
            for sym in row {
                write!(f, " {}", sym.as_char())?;
            }
        }
        Ok(())
    }
}
