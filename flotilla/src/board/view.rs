//! Text rendering of a grid.

use std::fmt;

use crate::board::{Cell, Grid, SIZE};

/// A renderable view of a [`Grid`].
///
/// The full view (for the grid's owner) marks occupied cells with `" B"`; the
/// public view (for the opponent) renders them exactly like empty water, so
/// ship locations are never revealed through it. Obtain one through
/// [`Grid::full_view`] or [`Grid::public_view`].
pub struct GridView<'a> {
    grid: &'a Grid,
    reveal_ships: bool,
}

impl<'a> GridView<'a> {
    pub(super) fn new(grid: &'a Grid, reveal_ships: bool) -> Self {
        Self { grid, reveal_ships }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " ")?;
        for x in 0..SIZE {
            write!(f, " {}", x)?;
        }
        for y in 0..SIZE {
            write!(f, "\n{}", y)?;
            for x in 0..SIZE {
                let glyph = match self.grid.cells[y][x] {
                    Cell::Occupied if self.reveal_ships => " B",
                    Cell::Occupied | Cell::Empty => " _",
                    Cell::Hit => " X",
                    Cell::Miss => " O",
                };
                f.write_str(glyph)?;
            }
        }
        Ok(())
    }
}
