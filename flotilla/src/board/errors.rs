//! Errors used by the [`Grid`][crate::board::Grid].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{
    board::Coordinate,
    ships::{Orientation, Ship},
};

/// Error caused when attempting to place a ship in an invalid position.
///
/// Covers both out-of-bounds and overlapping placements; the two are not
/// distinguished. The grid is left untouched, and the ship can be taken back
/// out of the error to retry with new parameters.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot place {ship} at {origin} {orientation:?}: off the board or overlapping another ship")]
pub struct PlaceError {
    ship: Ship,
    origin: Coordinate,
    orientation: Orientation,
}

impl PlaceError {
    /// Construct a placement error for the given ship and attempted position.
    pub(super) fn new(ship: Ship, origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            ship,
            origin,
            orientation,
        }
    }

    /// The ship that could not be placed.
    pub fn ship(&self) -> Ship {
        self.ship
    }

    /// The origin where placement was attempted.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The orientation placement was attempted with.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
