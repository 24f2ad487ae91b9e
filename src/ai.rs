//! Computer opponent logic: random fleet placement and hunt/target firing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::bitboard::Cells;
use crate::board::Board;
use crate::common::{AttackOutcome, ConfigError, Coordinate, SetupError};
use crate::config::{FLEET_RESTARTS, PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, ShipType};

/// What an attacker knows about the opponent's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetView {
    size: usize,
    shots: Cells,
    hits: Cells,
}

impl TargetView {
    pub fn of(board: &Board) -> Self {
        Self {
            size: board.size(),
            shots: board.shots(),
            hits: board.hits(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn shots(&self) -> Cells {
        self.shots
    }

    pub fn hits(&self) -> Cells {
        self.hits
    }

    pub fn is_attacked(&self, coord: Coordinate) -> bool {
        self.shots.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Cells that have not been fired upon, row-major.
    pub fn untried(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = self.size;
        (0..size * size)
            .map(move |i| Coordinate::new(i / size, i % size))
            .filter(move |c| !self.is_attacked(*c))
    }
}

/// Lays out a whole fleet on a board.
pub trait PlacementStrategy {
    /// Place every ship of `fleet` not yet on `board`. All-or-nothing.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipType],
    ) -> Result<(), SetupError>;
}

/// Picks the next cell to fire at.
pub trait TargetingStrategy {
    /// Choose an untried cell, or `None` when every cell has been tried.
    fn choose_coordinate(&mut self, rng: &mut SmallRng, view: &TargetView) -> Option<Coordinate>;

    /// Learn from the result of a shot this strategy chose.
    fn record_outcome(&mut self, _coord: Coordinate, _outcome: AttackOutcome) {}
}

/// Random anchors with a bounded retry budget, then every remaining position
/// in random order, then a full re-lay of the fleet.
#[derive(Debug, Clone, Copy)]
pub struct RandomPlacementStrategy {
    attempts: usize,
    restarts: usize,
}

impl Default for RandomPlacementStrategy {
    fn default() -> Self {
        Self::new(PLACEMENT_ATTEMPTS, FLEET_RESTARTS)
    }
}

impl RandomPlacementStrategy {
    pub fn new(attempts: usize, restarts: usize) -> Self {
        Self { attempts, restarts }
    }

    /// Returns a random legal (anchor, orientation) for `ship_type`, if the
    /// sampling budget finds one.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &Board,
        ship_type: ShipType,
    ) -> Option<(Coordinate, Orientation)> {
        let size = board.size();
        let len = ship_type.length();
        if len == 0 || len > size {
            return None;
        }
        for _ in 0..self.attempts {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (size - 1, size - len),
                Orientation::Vertical => (size - len, size - 1),
            };
            let anchor = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            if board.check_placement(ship_type, anchor, orient).is_ok() {
                return Some((anchor, orient));
            }
        }
        None
    }

    /// Every legal (anchor, orientation) for `ship_type`, shuffled.
    pub fn all_placements<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &Board,
        ship_type: ShipType,
    ) -> Vec<(Coordinate, Orientation)> {
        let size = board.size();
        let mut found = Vec::new();
        for row in 0..size {
            for col in 0..size {
                for orient in [Orientation::Horizontal, Orientation::Vertical] {
                    let anchor = Coordinate::new(row, col);
                    if board.check_placement(ship_type, anchor, orient).is_ok() {
                        found.push((anchor, orient));
                    }
                }
            }
        }
        found.shuffle(rng);
        found
    }

    fn lay_fleet<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        ships: &[ShipType],
    ) -> Result<(), SetupError> {
        for &ship_type in ships {
            if board.has_ship(ship_type.name()) {
                continue;
            }
            let spot = match self.random_placement(rng, board, ship_type) {
                Some(spot) => Some(spot),
                None => {
                    log::debug!(
                        "random sampling gave up on {}, searching exhaustively",
                        ship_type.name()
                    );
                    self.all_placements(rng, board, ship_type).first().copied()
                }
            };
            let (anchor, orient) = spot.ok_or(SetupError::SetupImpossible {
                ship: ship_type.name(),
            })?;
            board.place_ship(ship_type.build()?, anchor, orient)?;
        }
        Ok(())
    }
}

impl PlacementStrategy for RandomPlacementStrategy {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipType],
    ) -> Result<(), SetupError> {
        let mut ships: Vec<ShipType> = fleet.to_vec();
        // Stable sort keeps fleet order among equal lengths.
        ships.sort_by(|a, b| b.length().cmp(&a.length()));

        let mut last_err = SetupError::SetupImpossible { ship: "" };
        for attempt in 0..=self.restarts {
            let mut scratch = board.clone();
            match self.lay_fleet(rng, &mut scratch, &ships) {
                Ok(()) => {
                    *board = scratch;
                    return Ok(());
                }
                Err(SetupError::SetupImpossible { ship }) => {
                    log::warn!("fleet layout {} stuck on {}, starting over", attempt + 1, ship);
                    last_err = SetupError::SetupImpossible { ship };
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_err)
    }
}

/// Current sub-mode of [`HuntTargetStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntMode {
    /// Random search over untried cells.
    Hunt,
    /// Follow-up around a confirmed hit.
    Target,
}

/// Fires at random until something is hit, then works through the
/// orthogonal neighbours of each hit, oldest first.
#[derive(Debug, Clone)]
pub struct HuntTargetStrategy {
    size: usize,
    fired: Cells,
    worklist: VecDeque<Coordinate>,
}

impl HuntTargetStrategy {
    pub fn new(grid_size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            size: grid_size,
            fired: Cells::try_new(grid_size)?,
            worklist: VecDeque::new(),
        })
    }

    pub fn mode(&self) -> HuntMode {
        if self.worklist.is_empty() {
            HuntMode::Hunt
        } else {
            HuntMode::Target
        }
    }

    /// Pending follow-up candidates, next first.
    pub fn worklist(&self) -> impl Iterator<Item = &Coordinate> {
        self.worklist.iter()
    }

    fn is_fired(&self, coord: Coordinate) -> bool {
        self.fired.get(coord.row, coord.col).unwrap_or(false)
    }
}

impl TargetingStrategy for HuntTargetStrategy {
    fn choose_coordinate(&mut self, rng: &mut SmallRng, view: &TargetView) -> Option<Coordinate> {
        if view.size() == self.size {
            self.fired |= view.shots();
        }
        while let Some(candidate) = self.worklist.pop_front() {
            if !self.is_fired(candidate) && !view.is_attacked(candidate) {
                return Some(candidate);
            }
        }
        let untried: Vec<Coordinate> = view
            .untried()
            .filter(|c| !self.is_fired(*c))
            .collect();
        untried.choose(rng).copied()
    }

    fn record_outcome(&mut self, coord: Coordinate, outcome: AttackOutcome) {
        let _ = self.fired.set(coord.row, coord.col);
        if outcome == AttackOutcome::Hit {
            for n in coord.orthogonal_neighbors(self.size) {
                if !self.is_fired(n) {
                    self.worklist.push_back(n);
                }
            }
        }
    }
}
