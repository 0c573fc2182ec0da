extern crate pathfinding;
extern crate percolation;
extern crate rand;

use pathfinding::prelude::bfs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use percolation::{Percolation, PercolationStats, Site};

// None stands for the row above the grid
fn reachable_from_top(grid: &Percolation, target: Site) -> bool {
    let n = grid.size();
    let open = |s: &Site| grid.is_open(s.row, s.col).unwrap();
    bfs(
        &None,
        |node: &Option<Site>| -> Vec<Option<Site>> {
            match *node {
                None => (1..=n).map(|col| Site::new(1, col)).filter(|s| open(s)).map(Some).collect(),
                Some(site) => site.neighbors(n).into_iter().filter(|s| open(s)).map(Some).collect(),
            }
        },
        |node: &Option<Site>| *node == Some(target),
    ).is_some()
}

fn reaches_bottom(grid: &Percolation) -> bool {
    let n = grid.size();
    (1..=n).any(|col| reachable_from_top(grid, Site::new(n, col)))
}

#[test]
fn is_full_matches_flood_fill() {
    let mut rng = StdRng::seed_from_u64(2024);
    for &n in &[1usize, 2, 3, 5, 8] {
        for _ in 0..5 {
            let mut grid = Percolation::new(n).unwrap();
            for _ in 0..(n * n) {
                grid.open(rng.gen_range(1..=n), rng.gen_range(1..=n)).unwrap();
                for row in 1..=n {
                    for col in 1..=n {
                        let expected = reachable_from_top(&grid, Site::new(row, col));
                        assert_eq!(grid.is_full(row, col).unwrap(), expected,
                            "n = {}, site ({}, {})", n, row, col);
                    }
                }
                assert_eq!(grid.percolates(), reaches_bottom(&grid));
            }
        }
    }
}

#[test]
fn percolation_flips_once_and_stays() {
    let mut rng = StdRng::seed_from_u64(99);
    let n = 12;
    let mut grid = Percolation::new(n).unwrap();
    let mut flipped_at = None;
    for step in 1..=(n * n) {
        let site = percolation::stats::random_blocked_site(&grid, &mut rng).unwrap();
        grid.open(site.row, site.col).unwrap();
        match (flipped_at, grid.percolates()) {
            (None, true) => flipped_at = Some(step),
            (Some(_), false) => panic!("percolation lost at step {}", step),
            _ => {}
        }
    }
    assert!(flipped_at.is_some());
    assert_eq!(grid.number_of_blocked_sites(), 0);
}

#[test]
fn threshold_estimate_is_plausible() {
    let stats = PercolationStats::with_rng(20, 50, &mut StdRng::seed_from_u64(17)).unwrap();
    // p* is about 0.593 for the square lattice
    assert!(stats.mean() > 0.45 && stats.mean() < 0.75, "mean = {}", stats.mean());
    assert!(stats.stddev() > 0.0);
    assert!(stats.confidence_lo() < stats.confidence_hi());
}
