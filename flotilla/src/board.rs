//! Types that make up a single player's game board.

use crate::ships::{Orientation, Ship, FLEET_CELLS};

pub use self::{coordinate::Coordinate, errors::PlaceError, view::GridView};

mod coordinate;
mod errors;
mod view;

/// Width and height of the board.
pub const SIZE: usize = 10;

/// State of a single cell in a [`Grid`].
///
/// A cell only ever transitions `Empty -> Occupied` (placement),
/// `Occupied -> Hit`, or `Empty -> Miss` (attack). `Hit` and `Miss` are
/// terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// Open water that has not been attacked.
    Empty,
    /// Covered by a ship segment that has not been hit.
    Occupied,
    /// A ship segment that was attacked.
    Hit,
    /// Open water that was attacked.
    Miss,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Outcome of an attack on a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The attack struck a ship segment that had not been hit before.
    Hit,
    /// The attack struck open water.
    Miss,
    /// The cell had already been attacked; nothing changed.
    AlreadyResolved,
}

impl AttackOutcome {
    /// Returns true if the attack scored a new hit.
    pub fn is_hit(self) -> bool {
        matches!(self, AttackOutcome::Hit)
    }
}

/// A ship bound to a position on a grid. Placements are immutable: once a ship
/// is added to a [`Grid`] it never moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacedShip {
    ship: Ship,
    origin: Coordinate,
    orientation: Orientation,
}

impl PlacedShip {
    /// The ship definition.
    pub fn ship(&self) -> Ship {
        self.ship
    }

    /// The cell the ship extends from.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The direction the ship extends in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get an iterator over the coordinates of the cells this ship covers.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let (origin, orientation) = (self.origin, self.orientation);
        (0..self.ship.length()).map(move |dist| orientation.offset(origin, dist))
    }
}

/// A single player's 10x10 board: cell states, placed ships, and the running
/// hit count used for win detection.
///
/// A grid owns its cells exclusively. The opponent only ever touches it through
/// [`attack`][Grid::attack], [`is_defeated`][Grid::is_defeated], and the read
/// views.
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
    ships: Vec<PlacedShip>,
    hit_count: usize,
}

impl Grid {
    /// Create an empty grid with no ships placed.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            ships: Vec::new(),
            hit_count: 0,
        }
    }

    /// Number of distinct occupied cells that have been hit.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// The ships placed on this grid so far.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.cells
            .get(coord.y)
            .and_then(|row| row.get(coord.x))
            .copied()
    }

    /// Add a ship to the grid at the given origin and orientation.
    ///
    /// Every cell of the ship's footprint must lie on the board and be empty.
    /// On failure nothing is mutated and the error carries the ship back so the
    /// caller can retry with new parameters.
    pub fn add_ship(
        &mut self,
        ship: Ship,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        // Check the origin before computing offsets: offsets from an in-bounds
        // origin cannot overflow.
        if origin.x >= SIZE || origin.y >= SIZE {
            return Err(PlaceError::new(ship, origin, orientation));
        }
        let placed = PlacedShip {
            ship,
            origin,
            orientation,
        };
        // Validate the whole footprint before committing anything.
        for coord in placed.coords() {
            match self.get(coord) {
                Some(Cell::Empty) => {}
                // Off the board or already occupied; the two are not
                // distinguished.
                _ => return Err(PlaceError::new(ship, origin, orientation)),
            }
        }
        for coord in placed.coords() {
            self.cells[coord.y][coord.x] = Cell::Occupied;
        }
        self.ships.push(placed);
        Ok(())
    }

    /// Resolve an attack on the given cell.
    ///
    /// Coordinates must be validated by the caller before the call; both axes
    /// are expected to be in `[0, 9]`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn attack(&mut self, coord: Coordinate) -> AttackOutcome {
        let cell = &mut self.cells[coord.y][coord.x];
        match *cell {
            Cell::Occupied => {
                *cell = Cell::Hit;
                self.hit_count += 1;
                AttackOutcome::Hit
            }
            Cell::Empty => {
                *cell = Cell::Miss;
                AttackOutcome::Miss
            }
            Cell::Hit | Cell::Miss => AttackOutcome::AlreadyResolved,
        }
    }

    /// Returns true once every ship cell has been hit.
    pub fn is_defeated(&self) -> bool {
        self.hit_count == FLEET_CELLS
    }

    /// Get the owner's rendering of the grid, with ship locations revealed.
    pub fn full_view(&self) -> GridView {
        GridView::new(self, true)
    }

    /// Get the opponent's rendering of the grid. Occupied cells render exactly
    /// like empty ones; only hits and misses are distinguishable.
    pub fn public_view(&self) -> GridView {
        GridView::new(self, false)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
