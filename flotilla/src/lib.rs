//! Implementation of the classic game of Battleship: two players, the standard
//! five-ship fleet, and a fixed 10x10 grid per side.
//!
//! [`board`] holds a single player's grid: ship placement, attack resolution, and
//! the owner/opponent text views.
//!
//! [`ships`] defines the fixed fleet.
//!
//! [`strategy`] defines the seams a player plugs into: one trait for placing the
//! fleet and one for choosing attack targets, along with the randomized
//! implementations used for a computer player. Interactive implementations live
//! with whatever is driving the game (see the `battleship` binary).
//!
//! [`game`] runs a full match: setup, strict turn alternation, and win detection.

pub mod board;
pub mod game;
pub mod logging;
pub mod ships;
pub mod strategy;

pub use logging::init_logging;
