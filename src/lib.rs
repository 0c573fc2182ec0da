#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
extern crate rand;
extern crate thiserror;

mod disjoint_set;
mod error;
mod percolation;
mod site;
pub mod config;
pub mod stats;

pub use config::SimulationConfig;
pub use disjoint_set::DisjointSet;
pub use error::{PercolationError, Result};
pub use percolation::Percolation;
pub use site::{Direction, Site};
pub use stats::{PercolationStats, CONFIDENCE_95};
