//! Monte Carlo estimate of the percolation threshold.
//!
//! Every trial opens uniformly random blocked sites on a fresh grid until it
//! percolates and records the fraction of open sites at that point.

use std::cell::OnceCell;
use std::fmt;

use rand::Rng;
use serde_json::Value;

use crate::error::{PercolationError, Result};
use crate::percolation::Percolation;
use crate::site::Site;

/// z-score of the two-sided 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Draws a uniformly random blocked site, resampling over `[1, n]²` until one
/// is found. `None` once every site is open.
pub fn random_blocked_site<R: Rng + ?Sized>(grid: &Percolation, rng: &mut R) -> Option<Site> {
    if grid.number_of_blocked_sites() == 0 {
        return None;
    }
    let n = grid.size();
    loop {
        let site = Site::new(rng.gen_range(1..=n), rng.gen_range(1..=n));
        if let Ok(false) = grid.is_open(site.row, site.col) {
            return Some(site);
        }
    }
}

/// Runs one trial on a fresh n-by-n grid and returns open sites / n².
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let site = random_blocked_site(&grid, rng).ok_or_else(|| PercolationError::InvalidArgument(
            format!("{}x{} grid fully open without percolating", n, n)))?;
        grid.open(site.row, site.col)?;
    }
    let fraction = grid.number_of_open_sites() as f64 / (n * n) as f64;
    debug!("trial on {}x{} percolated with {} open sites ({})",
        n, n, grid.number_of_open_sites(), fraction);
    Ok(fraction)
}

#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    results: Vec<f64>,
    mean: OnceCell<f64>,
    stddev: OnceCell<f64>,
}

impl PercolationStats {
    /// Performs `trials` independent trials on an n-by-n grid.
    pub fn new(n: usize, trials: usize) -> Result<PercolationStats> {
        PercolationStats::with_rng(n, trials, &mut rand::thread_rng())
    }

    /// Same as `new`, drawing sites from `rng`. A seeded rng gives reproducible runs.
    pub fn with_rng<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<PercolationStats> {
        if n == 0 || trials == 0 {
            return Err(PercolationError::InvalidArgument(
                format!("n and trials must be positive (got n = {}, trials = {})", n, trials)));
        }
        info!("running {} trials on a {}x{} grid", trials, n, n);
        let mut results = Vec::with_capacity(trials);
        for _ in 0..trials {
            results.push(run_trial(n, rng)?);
        }
        PercolationStats::from_results(n, results)
    }

    /// Aggregates trial results that were produced elsewhere.
    pub fn from_results(n: usize, results: Vec<f64>) -> Result<PercolationStats> {
        if n == 0 || results.is_empty() {
            return Err(PercolationError::InvalidArgument(
                "at least one trial result on a positive grid size is required".to_string()));
        }
        Ok(PercolationStats {
            n,
            results,
            mean: OnceCell::new(),
            stddev: OnceCell::new(),
        })
    }

    pub fn grid_size(&self) -> usize {
        self.n
    }

    pub fn trials(&self) -> usize {
        self.results.len()
    }

    pub fn results(&self) -> &[f64] {
        &self.results
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        *self.mean.get_or_init(|| {
            self.results.iter().sum::<f64>() / self.results.len() as f64
        })
    }

    /// Sample standard deviation (n - 1 denominator). NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        *self.stddev.get_or_init(|| {
            let count = self.results.len();
            if count < 2 {
                return f64::NAN;
            }
            let mean = self.mean();
            let sum_sq: f64 = self.results.iter().map(|x| (x - mean) * (x - mean)).sum();
            (sum_sq / (count - 1) as f64).sqrt()
        })
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    /// The report as JSON; undefined values (single trial) become null.
    pub fn to_json(&self) -> Value {
        json!({
            "n": self.n,
            "trials": self.trials(),
            "mean": self.mean(),
            "stddev": self.stddev(),
            "confidence_lo": self.confidence_lo(),
            "confidence_hi": self.confidence_hi(),
        })
    }
}

impl fmt::Display for PercolationStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "mean                    = {}", self.mean())?;
        writeln!(f, "stddev                  = {}", self.stddev())?;
        write!(f, "95% confidence interval = [{}, {}]", self.confidence_lo(), self.confidence_hi())
    }
}
