#![forbid(unsafe_code)]

mod error;
mod grid;
mod stats;
mod union_find;

pub use error::{Error, Result};
pub use grid::Percolation;
pub use stats::{mean, run_trial, stddev, PercolationStats, CONFIDENCE_95};
