//! Ship definitions, geometry and damage tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::common::{Coordinate, PlacementError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Build a fresh, unplaced ship of this type.
    pub fn build(&self) -> Result<Ship, PlacementError> {
        Ship::new(self.length, self.name)
    }

    /// Cells covered when anchored at `anchor` and extending right or down.
    /// Returns `None` if the run would overflow the coordinate space.
    pub fn layout(&self, anchor: Coordinate, orientation: Orientation) -> Option<Vec<Coordinate>> {
        (0..self.length)
            .map(|i| match orientation {
                Orientation::Horizontal => anchor.col.checked_add(i).map(|c| Coordinate::new(anchor.row, c)),
                Orientation::Vertical => anchor.row.checked_add(i).map(|r| Coordinate::new(r, anchor.col)),
            })
            .collect()
    }
}

/// What a single shot did to a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitEffect {
    /// Cell is not part of the ship, or was already hit.
    Ignored,
    /// New hit; the ship is still afloat.
    Damaged,
    /// New hit that completed the ship's destruction.
    Sunk,
}

/// A single vessel: fixed geometry once placed, plus the set of hit cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Option<Orientation>,
    coordinates: BTreeSet<Coordinate>,
    hits: BTreeSet<Coordinate>,
}

impl Ship {
    /// Create an unplaced ship. A zero size is rejected.
    pub fn new(size: usize, name: &'static str) -> Result<Self, PlacementError> {
        if size == 0 {
            return Err(PlacementError::InvalidGeometry);
        }
        Ok(Ship {
            ship_type: ShipType::new(name, size),
            orientation: None,
            coordinates: BTreeSet::new(),
            hits: BTreeSet::new(),
        })
    }

    /// Fix the ship's cells. Allowed once; the cells must form a straight,
    /// gap-free run of exactly `size` cells in one row or one column.
    pub fn assign_coordinates(&mut self, coords: &[Coordinate]) -> Result<(), PlacementError> {
        if self.is_placed() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let size = self.size();
        let set: BTreeSet<Coordinate> = coords.iter().copied().collect();
        if coords.len() != size || set.len() != size {
            return Err(PlacementError::InvalidGeometry);
        }
        let (first, last) = match (set.first(), set.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return Err(PlacementError::InvalidGeometry),
        };
        // The set is sorted row-major, so a straight run spans exactly size-1.
        let orientation = if set.iter().all(|c| c.row == first.row) && last.col - first.col == size - 1 {
            Orientation::Horizontal
        } else if set.iter().all(|c| c.col == first.col) && last.row - first.row == size - 1 {
            Orientation::Vertical
        } else {
            return Err(PlacementError::InvalidGeometry);
        };
        self.orientation = Some(orientation);
        self.coordinates = set;
        Ok(())
    }

    /// Record a shot at `coord`. Only cells of this ship that were not hit
    /// before count; everything else leaves the ship untouched.
    pub fn register_hit(&mut self, coord: Coordinate) -> HitEffect {
        if !self.coordinates.contains(&coord) || !self.hits.insert(coord) {
            return HitEffect::Ignored;
        }
        if self.is_sunk() {
            HitEffect::Sunk
        } else {
            HitEffect::Damaged
        }
    }

    /// Check if the ship is sunk (every cell hit). Unplaced ships never are.
    pub fn is_sunk(&self) -> bool {
        self.is_placed() && self.hits == self.coordinates
    }

    pub fn is_placed(&self) -> bool {
        !self.coordinates.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coordinates.contains(&coord)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    /// Orientation, once placed.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn coordinates(&self) -> &BTreeSet<Coordinate> {
        &self.coordinates
    }

    pub fn hits(&self) -> &BTreeSet<Coordinate> {
        &self.hits
    }
}
