//! The seams a player plugs into: fleet placement and target selection.
//!
//! Both traits are implemented here for the randomized computer player. The
//! interactive variants live with the I/O layer driving the game, which is why
//! the methods return [`io::Result`]: an interactive strategy's input source
//! can fail, and the match surfaces that instead of unwinding.

use std::{collections::HashSet, io};

use log::trace;
use rand::Rng;

use crate::{
    board::{Coordinate, Grid, SIZE},
    ships::FLEET,
};

/// Produces a complete placement of the fixed fleet on a grid.
pub trait PlacementStrategy {
    /// Place every ship of the fleet onto the grid. Implementations must not
    /// return `Ok` until all five ships have been successfully added.
    fn place_fleet(&mut self, grid: &mut Grid) -> io::Result<()>;
}

/// Produces the target coordinate for one turn.
pub trait TargetStrategy {
    /// Choose the cell to attack this turn. `own` is the acting side's grid and
    /// `opponent` the grid under attack; both are read-only (interactive
    /// implementations render them, others may ignore them). The returned
    /// coordinate must lie on the board, since it is fed straight to
    /// [`Grid::attack`].
    fn select_target(&mut self, own: &Grid, opponent: &Grid) -> io::Result<Coordinate>;
}

/// Places each ship at a uniformly random origin and orientation, retrying
/// until the placement is accepted. With 17 fleet cells on 100 the retry loop
/// converges quickly, so no attempt cap is applied.
pub struct RandomPlacement<R> {
    rng: R,
}

impl<R> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlacementStrategy for RandomPlacement<R> {
    fn place_fleet(&mut self, grid: &mut Grid) -> io::Result<()> {
        for &ship in FLEET.iter() {
            let mut ship = ship;
            loop {
                let origin = self.rng.gen();
                let orientation = self.rng.gen();
                match grid.add_ship(ship, origin, orientation) {
                    Ok(()) => break,
                    Err(err) => {
                        trace!("rejected placement: {}", err);
                        ship = err.into_ship();
                    }
                }
            }
        }
        Ok(())
    }
}

/// Selects uniformly random targets, remembering its previous picks so it never
/// repeats one.
///
/// Once every cell on the board is in the attacked set the no-repeat filter is
/// released and a possibly-repeated coordinate is returned; a game that reaches
/// that point is already decided, and the release keeps the selection loop from
/// spinning forever.
pub struct RandomTargeter<R> {
    rng: R,
    attacked: HashSet<Coordinate>,
}

impl<R> RandomTargeter<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            attacked: HashSet::new(),
        }
    }
}

impl<R: Rng> TargetStrategy for RandomTargeter<R> {
    fn select_target(&mut self, _own: &Grid, _opponent: &Grid) -> io::Result<Coordinate> {
        let mut coord: Coordinate = self.rng.gen();
        while self.attacked.contains(&coord) && self.attacked.len() < SIZE * SIZE {
            coord = self.rng.gen();
        }
        self.attacked.insert(coord);
        Ok(coord)
    }
}
