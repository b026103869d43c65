use std::io;

use flotilla::board::{AttackOutcome, Coordinate, Grid};
use flotilla::game::{Match, MatchError, Player, Side};
use flotilla::ships::{Orientation, FLEET, FLEET_CELLS};
use flotilla::strategy::{PlacementStrategy, TargetStrategy};

/// Places the whole fleet horizontally on even rows, starting at x = 0.
struct RowPlacement;

impl PlacementStrategy for RowPlacement {
    fn place_fleet(&mut self, grid: &mut Grid) -> io::Result<()> {
        for (i, &ship) in FLEET.iter().enumerate() {
            grid.add_ship(ship, Coordinate::new(0, i * 2), Orientation::Horizontal)
                .unwrap();
        }
        Ok(())
    }
}

/// Replays a fixed list of targets, cycling when it runs out.
struct Script {
    targets: Vec<Coordinate>,
    next: usize,
}

impl Script {
    fn new(targets: Vec<(usize, usize)>) -> Self {
        Self {
            targets: targets.into_iter().map(Coordinate::from).collect(),
            next: 0,
        }
    }
}

impl TargetStrategy for Script {
    fn select_target(&mut self, _own: &Grid, _opponent: &Grid) -> io::Result<Coordinate> {
        let coord = self.targets[self.next % self.targets.len()];
        self.next += 1;
        Ok(coord)
    }
}

fn scripted_side(name: &str, targets: Vec<(usize, usize)>) -> Side {
    Side::new(name, Box::new(RowPlacement), Box::new(Script::new(targets)))
}

/// Every cell covered by the `RowPlacement` layout, in order.
fn row_layout_cells() -> Vec<(usize, usize)> {
    FLEET
        .iter()
        .enumerate()
        .flat_map(|(i, ship)| (0..ship.length()).map(move |x| (x, i * 2)))
        .collect()
}

#[test]
fn turn_before_setup_is_rejected() {
    let mut game = Match::new(
        scripted_side("a", vec![(0, 0)]),
        scripted_side("b", vec![(0, 0)]),
    );
    assert!(matches!(
        game.run_next_turn(),
        Err(MatchError::SetupIncomplete)
    ));
}

#[test]
fn setup_runs_once_and_places_both_fleets() {
    let mut game = Match::new(
        scripted_side("a", vec![(0, 0)]),
        scripted_side("b", vec![(0, 0)]),
    );
    game.run_setup_phase().unwrap();
    assert_eq!(game.side(Player::P1).grid().ships().len(), FLEET.len());
    assert_eq!(game.side(Player::P2).grid().ships().len(), FLEET.len());
    assert!(matches!(
        game.run_setup_phase(),
        Err(MatchError::SetupAlreadyRun)
    ));
}

#[test]
fn alternation_is_unconditional() {
    // Both sides keep hitting; turns must still alternate strictly.
    let mut game = Match::new(
        scripted_side("a", row_layout_cells()),
        scripted_side("b", row_layout_cells()),
    );
    game.run_setup_phase().unwrap();

    for i in 0..8 {
        let expected = if i % 2 == 0 { Player::P1 } else { Player::P2 };
        assert_eq!(game.current(), expected);
        let report = game.run_next_turn().unwrap();
        assert_eq!(report.attacker, expected);
        assert_eq!(report.outcome, AttackOutcome::Hit);
    }
}

#[test]
fn stats_count_attempts_hits_and_misses() {
    // P1: a hit, a miss, then a repeat of the hit cell. P2: three fresh misses
    // on the empty bottom row.
    let mut game = Match::new(
        scripted_side("a", vec![(0, 0), (9, 9), (0, 0)]),
        scripted_side("b", vec![(9, 9), (8, 9), (7, 9)]),
    );
    game.run_setup_phase().unwrap();

    let outcomes: Vec<AttackOutcome> = (0..6)
        .map(|_| game.run_next_turn().unwrap())
        .filter(|report| report.attacker == Player::P1)
        .map(|report| report.outcome)
        .collect();
    assert_eq!(
        outcomes,
        vec![
            AttackOutcome::Hit,
            AttackOutcome::Miss,
            AttackOutcome::AlreadyResolved,
        ]
    );

    let p1 = game.side(Player::P1).stats();
    assert_eq!(p1.attempts(), 3);
    assert_eq!(p1.hits(), 1);
    assert_eq!(p1.misses(), 1);

    let p2 = game.side(Player::P2).stats();
    assert_eq!(p2.attempts(), 3);
    assert_eq!(p2.hits(), 0);
    assert_eq!(p2.misses(), 3);
}

#[test]
fn first_side_to_sink_the_fleet_wins() {
    // P1 walks the opponent's entire layout; P2 wastes every turn on (9, 9).
    let mut game = Match::new(
        scripted_side("a", row_layout_cells()),
        scripted_side("b", vec![(9, 9)]),
    );
    game.run_setup_phase().unwrap();

    let mut turns = 0;
    let winner = loop {
        let report = game.run_next_turn().unwrap();
        turns += 1;
        if let Some(winner) = report.winner {
            assert_eq!(report.attacker, winner);
            break winner;
        }
    };

    assert_eq!(winner, Player::P1);
    assert_eq!(game.winner(), Some(Player::P1));
    assert!(game.side(Player::P2).grid().is_defeated());
    assert_eq!(game.side(Player::P1).stats().hits(), FLEET_CELLS as u32);
    // 17 P1 turns interleaved with 16 P2 turns.
    assert_eq!(turns, 2 * FLEET_CELLS - 1);

    assert!(matches!(game.run_next_turn(), Err(MatchError::AlreadyOver)));
}
