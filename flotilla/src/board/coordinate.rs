use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::SIZE;

/// The coordinates of a cell in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Distribution<Coordinate> for Standard {
    /// Sample a uniformly random cell of the 10x10 board.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::new(rng.gen_range(0, SIZE), rng.gen_range(0, SIZE))
    }
}
