//! The n-by-n percolation grid.
//!
//! Sites are unioned incrementally as they open. Two virtual sentinels sit
//! past the last real index: virtual-top (`n²`) is unioned with all of row 1
//! and virtual-bottom (`n² + 1`) with all of row n, so `percolates()` is a
//! single root comparison.
//!
//! `is_full` is answered from a second disjoint set that only carries the
//! top sentinel. With one shared set, a bottom-row site touching virtual-bottom
//! would look full as soon as any column percolates (backwash).

use crate::disjoint_set::DisjointSet;
use crate::error::{PercolationError, Result};
use crate::site::Site;

#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_sites: usize,
    // top + bottom sentinels, answers percolates()
    connectivity: DisjointSet,
    // top sentinel only, answers is_full()
    fullness: DisjointSet,
}

impl Percolation {
    /// Creates an n-by-n grid with every site blocked.
    pub fn new(n: usize) -> Result<Percolation> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size n must be positive".to_string()));
        }
        let num_sites = n.checked_mul(n)
            .filter(|s| s.checked_add(2).is_some())
            .ok_or_else(|| PercolationError::InvalidArgument(
                format!("grid size {} is too large", n)))?;

        let mut connectivity = DisjointSet::make_singletons(num_sites + 2);
        let mut fullness = DisjointSet::make_singletons(num_sites + 1);
        let top = num_sites;
        let bottom = num_sites + 1;
        for col in 0..n {
            connectivity.unite(top, col);
            fullness.unite(top, col);
        }
        for idx in (num_sites - n)..num_sites {
            connectivity.unite(bottom, idx);
        }

        Ok(Percolation {
            n,
            open: vec![false; num_sites],
            open_sites: 0,
            connectivity,
            fullness,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Opens the site at (row, col) if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.validate(row, col)?;
        let idx = site.index(self.n);
        if self.open[idx] {
            return Ok(());
        }
        self.open[idx] = true;
        self.open_sites += 1;

        for next in site.neighbors(self.n) {
            let next_idx = next.index(self.n);
            if self.open[next_idx] {
                self.connectivity.unite(idx, next_idx);
                self.fullness.unite(idx, next_idx);
            }
        }
        trace!("opened {} ({} open)", site, self.open_sites);
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.validate(row, col)?;
        Ok(self.open[site.index(self.n)])
    }

    /// An open site joined to row 1 through open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.validate(row, col)?;
        let idx = site.index(self.n);
        // row 1 is pre-unioned with the sentinel whether open or not
        Ok(self.open[idx] && self.fullness.connected(idx, self.virtual_top()))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    pub fn number_of_blocked_sites(&self) -> usize {
        self.open.len() - self.open_sites
    }

    pub fn percolates(&self) -> bool {
        // for n = 1 both sentinels share the sole site from construction on
        self.open_sites > 0
            && self.connectivity.connected(self.virtual_top(), self.virtual_bottom())
    }

    fn virtual_top(&self) -> usize {
        self.open.len()
    }

    fn virtual_bottom(&self) -> usize {
        self.open.len() + 1
    }

    fn validate(&self, row: usize, col: usize) -> Result<Site> {
        let site = Site::new(row, col);
        if site.in_grid(self.n) {
            Ok(site)
        } else {
            Err(PercolationError::InvalidArgument(
                format!("site {} is outside the {}x{} grid", site, self.n, self.n)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_all(p: &mut Percolation, sites: &[(usize, usize)]) {
        for &(row, col) in sites {
            p.open(row, col).unwrap();
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        match Percolation::new(0) {
            Err(PercolationError::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert!(Percolation::new(usize::max_value()).is_err());
    }

    #[test]
    fn fresh_grid_is_blocked() {
        for n in 1..6 {
            let p = Percolation::new(n).unwrap();
            assert_eq!(p.number_of_open_sites(), 0);
            assert_eq!(p.number_of_blocked_sites(), n * n);
            assert!(!p.percolates());
            for row in 1..=n {
                for col in 1..=n {
                    assert!(!p.is_open(row, col).unwrap());
                    assert!(!p.is_full(row, col).unwrap());
                }
            }
        }
    }

    #[test]
    fn reopen_counts_once() {
        let mut p = Percolation::new(4).unwrap();
        p.open(2, 3).unwrap();
        p.open(2, 3).unwrap();
        assert_eq!(p.number_of_open_sites(), 1);
        assert!(p.is_open(2, 3).unwrap());
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut p = Percolation::new(3).unwrap();
        for &(row, col) in &[(0, 1), (1, 0), (4, 1), (1, 4), (0, 0), (4, 4)] {
            assert!(p.open(row, col).is_err());
            assert!(p.is_open(row, col).is_err());
            assert!(p.is_full(row, col).is_err());
        }
        assert_eq!(p.number_of_open_sites(), 0);
    }

    #[test]
    fn single_site_grid() {
        let mut p = Percolation::new(1).unwrap();
        assert!(!p.percolates());
        assert!(!p.is_full(1, 1).unwrap());
        p.open(1, 1).unwrap();
        assert!(p.is_open(1, 1).unwrap());
        assert!(p.is_full(1, 1).unwrap());
        assert!(p.percolates());
    }

    #[test]
    fn three_by_three_without_backwash() {
        let mut p = Percolation::new(3).unwrap();
        p.open(1, 3).unwrap();
        assert!(!p.percolates());
        p.open(2, 3).unwrap();
        assert!(!p.percolates());
        p.open(3, 3).unwrap();
        assert!(p.percolates());
        assert!(p.is_full(3, 3).unwrap());

        p.open(3, 1).unwrap();
        assert!(p.percolates());
        assert!(!p.is_full(3, 1).unwrap());
        p.open(2, 1).unwrap();
        assert!(!p.is_full(3, 1).unwrap());
        assert!(!p.is_full(2, 1).unwrap());
        p.open(1, 1).unwrap();
        assert!(p.is_full(3, 1).unwrap());
        assert!(p.is_full(2, 1).unwrap());
        assert_eq!(p.number_of_open_sites(), 6);
    }

    #[test]
    fn blocked_top_row_site_is_not_full() {
        let mut p = Percolation::new(3).unwrap();
        p.open(1, 1).unwrap();
        assert!(p.is_full(1, 1).unwrap());
        assert!(!p.is_full(1, 2).unwrap());
    }

    #[test]
    fn diagonal_does_not_connect() {
        let mut p = Percolation::new(2).unwrap();
        open_all(&mut p, &[(1, 1), (2, 2)]);
        assert!(!p.percolates());
        assert!(!p.is_full(2, 2).unwrap());
    }

    #[test]
    fn percolation_is_monotone() {
        let mut p = Percolation::new(4).unwrap();
        open_all(&mut p, &[(1, 2), (2, 2), (3, 2), (4, 2)]);
        assert!(p.percolates());
        for row in 1..=4 {
            for col in 1..=4 {
                p.open(row, col).unwrap();
                assert!(p.percolates());
            }
        }
        assert_eq!(p.number_of_open_sites(), 16);
        assert_eq!(p.number_of_blocked_sites(), 0);
    }

    #[test]
    fn winding_path_percolates() {
        // one winding 8x8 path, closed by the last bottom-row site
        let mut p = Percolation::new(8).unwrap();
        open_all(&mut p, &[
            (1, 3), (1, 4), (1, 5), (2, 4), (2, 5), (2, 6), (2, 7), (2, 8),
            (3, 6), (3, 7), (4, 6), (4, 7), (4, 8), (5, 6), (5, 7), (6, 7),
            (6, 8), (7, 5), (7, 6), (7, 7), (7, 8),
        ]);
        assert!(!p.percolates());
        p.open(8, 6).unwrap();
        assert!(p.percolates());
        assert!(p.is_full(8, 6).unwrap());
    }
}
