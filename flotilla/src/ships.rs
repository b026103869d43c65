//! The fixed fleet and the types that describe a ship before placement.

use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// Placement orientation of a ship. A ship extends from its origin towards `+x`
/// (horizontal) or `+y` (vertical).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Get the coordinate `dist` cells from `origin` along this orientation.
    pub(crate) fn offset(self, origin: Coordinate, dist: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(origin.x + dist, origin.y),
            Orientation::Vertical => Coordinate::new(origin.x, origin.y + dist),
        }
    }
}

impl Distribution<Orientation> for Standard {
    /// Sample an orientation with a fair coin flip.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship definition: a label and a length. Ships carry no position of their
/// own; placement binds them to a grid (see
/// [`Grid::add_ship`][crate::board::Grid::add_ship]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    name: &'static str,
    length: usize,
}

impl Ship {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// The ship's label, e.g. "Patrol Boat".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of contiguous cells the ship occupies.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name)
    }
}

/// The fixed fleet each side must place before play begins, in placement order.
pub const FLEET: [Ship; 5] = [
    Ship::new("Aircraft Carrier", 5),
    Ship::new("Battleship", 4),
    Ship::new("Submarine", 3),
    Ship::new("Destroyer", 3),
    Ship::new("Patrol Boat", 2),
];

/// Total number of cells covered by the fleet. A grid whose hit count reaches
/// this value has no ships left afloat.
pub const FLEET_CELLS: usize = fleet_cells();

const fn fleet_cells() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i].length;
        i += 1;
    }
    total
}
