use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use flotilla::board::{Cell, Coordinate, Grid, SIZE};
use flotilla::ships::{FLEET, FLEET_CELLS};
use flotilla::strategy::{PlacementStrategy, RandomPlacement, RandomTargeter, TargetStrategy};

fn occupied_cells(grid: &Grid) -> usize {
    (0..SIZE)
        .flat_map(|y| (0..SIZE).map(move |x| Coordinate::new(x, y)))
        .filter(|&coord| grid.get(coord) == Some(Cell::Occupied))
        .count()
}

#[test]
fn random_placement_places_the_whole_fleet_without_overlap() {
    for seed in 0..20 {
        let mut grid = Grid::new();
        let mut placement = RandomPlacement::new(StdRng::seed_from_u64(seed));
        placement.place_fleet(&mut grid).unwrap();

        assert_eq!(grid.ships().len(), FLEET.len(), "seed {}", seed);
        // 17 occupied cells means no two ships share a cell.
        assert_eq!(occupied_cells(&grid), FLEET_CELLS, "seed {}", seed);
    }
}

#[test]
fn random_targeter_never_repeats_until_the_board_is_exhausted() {
    let own = Grid::new();
    let opponent = Grid::new();
    let mut targeter = RandomTargeter::new(StdRng::seed_from_u64(7));

    let mut seen = HashSet::new();
    for i in 0..SIZE * SIZE {
        let coord = targeter.select_target(&own, &opponent).unwrap();
        assert!(coord.x < SIZE && coord.y < SIZE);
        seen.insert(coord);
        assert_eq!(seen.len(), i + 1, "target repeated after {} draws", i);
    }
    assert_eq!(seen.len(), SIZE * SIZE);

    // With every cell attacked the filter is released: the call must still
    // return promptly even though the coordinate is necessarily a repeat.
    let coord = targeter.select_target(&own, &opponent).unwrap();
    assert!(seen.contains(&coord));
}
