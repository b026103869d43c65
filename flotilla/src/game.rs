//! Match orchestration: two sides, strict turn alternation, win detection.

use std::fmt;

use log::debug;

use crate::{
    board::{AttackOutcome, Coordinate, Grid},
    strategy::{PlacementStrategy, TargetStrategy},
};

pub use self::errors::MatchError;

mod errors;

/// Identifies one of the two sides of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// Running attack statistics for one side.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AttackStats {
    attempts: u32,
    hits: u32,
    misses: u32,
}

impl AttackStats {
    /// Total attacks made, including repeats of already-resolved cells.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attacks that scored a new hit.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Attacks that struck open water.
    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Record one attack. Attempts always count; an already-resolved cell
    /// counts as neither a hit nor a miss.
    fn record(&mut self, outcome: AttackOutcome) {
        self.attempts += 1;
        match outcome {
            AttackOutcome::Hit => self.hits += 1,
            AttackOutcome::Miss => self.misses += 1,
            AttackOutcome::AlreadyResolved => {}
        }
    }
}

impl fmt::Display for AttackStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Attacks: {}, Hits: {}, Misses: {}",
            self.attempts, self.hits, self.misses
        )
    }
}

/// One side of a match: a named player, the grid they own, and the strategies
/// chosen for them at construction time.
pub struct Side {
    name: String,
    grid: Grid,
    placement: Box<dyn PlacementStrategy>,
    targeting: Box<dyn TargetStrategy>,
    stats: AttackStats,
}

impl Side {
    /// Create a side with an empty grid and the given strategies.
    pub fn new(
        name: impl Into<String>,
        placement: Box<dyn PlacementStrategy>,
        targeting: Box<dyn TargetStrategy>,
    ) -> Self {
        Self {
            name: name.into(),
            grid: Grid::new(),
            placement,
            targeting,
            stats: AttackStats::default(),
        }
    }

    /// The side's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grid this side owns.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// This side's attack statistics.
    pub fn stats(&self) -> AttackStats {
        self.stats
    }
}

/// Phase of a [`Match`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    Setup,
    Playing,
    Finished(Player),
}

/// Report of a single resolved turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// The side that acted this turn.
    pub attacker: Player,
    /// The cell that was attacked.
    pub target: Coordinate,
    /// What the attack did.
    pub outcome: AttackOutcome,
    /// The winner, if this turn ended the match.
    pub winner: Option<Player>,
}

/// A full two-player match. Created once per game; once a winner is determined
/// no further turns are processed.
///
/// Sides never hold references to each other: the opponent association is an
/// index into the match's own two-element side array.
pub struct Match {
    sides: [Side; 2],
    current: Player,
    phase: Phase,
}

impl Match {
    /// Create a match between the two sides. `p1` always takes the first turn.
    pub fn new(p1: Side, p2: Side) -> Self {
        Self {
            sides: [p1, p2],
            current: Player::P1,
            phase: Phase::Setup,
        }
    }

    /// The player whose turn it is (or would be, once setup completes).
    pub fn current(&self) -> Player {
        self.current
    }

    /// The winner, if the match is over.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Finished(winner) => Some(winner),
            _ => None,
        }
    }

    /// Get the side belonging to the given player.
    pub fn side(&self, player: Player) -> &Side {
        match player {
            Player::P1 => &self.sides[0],
            Player::P2 => &self.sides[1],
        }
    }

    /// Run both sides' placement strategies to completion: P1 places its whole
    /// fleet, then P2. Transitions the match into the playing phase.
    pub fn run_setup_phase(&mut self) -> Result<(), MatchError> {
        if self.phase != Phase::Setup {
            return Err(MatchError::SetupAlreadyRun);
        }
        let [p1, p2] = &mut self.sides;
        p1.placement.place_fleet(&mut p1.grid)?;
        p2.placement.place_fleet(&mut p2.grid)?;
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Run a single turn for the side whose turn it is: select a target, attack
    /// the opponent's grid, update the acting side's stats, and check for a
    /// win.
    pub fn run_next_turn(&mut self) -> Result<TurnReport, MatchError> {
        match self.phase {
            Phase::Setup => return Err(MatchError::SetupIncomplete),
            Phase::Finished(_) => return Err(MatchError::AlreadyOver),
            Phase::Playing => {}
        }
        let acting = self.current;
        let [p1, p2] = &mut self.sides;
        let (attacker, defender) = match acting {
            Player::P1 => (p1, p2),
            Player::P2 => (p2, p1),
        };

        let target = attacker
            .targeting
            .select_target(&attacker.grid, &defender.grid)?;
        let outcome = defender.grid.attack(target);
        attacker.stats.record(outcome);
        debug!("{} attacks {} -> {:?}", attacker.name, target, outcome);

        let winner = if defender.grid.is_defeated() {
            self.phase = Phase::Finished(acting);
            Some(acting)
        } else {
            None
        };
        // Alternation is unconditional; a hit does not earn an extra turn.
        self.current = acting.opponent();

        Ok(TurnReport {
            attacker: acting,
            target,
            outcome,
            winner,
        })
    }
}
