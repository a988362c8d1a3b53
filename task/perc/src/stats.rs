use crate::{
    error::{Error, Result},
    grid::Percolation,
};

use rand::Rng;

////////////////////////////////////////////////////////////////////////////////

/// Two-sided 95% quantile of the standard normal distribution.
pub const CONFIDENCE_95: f64 = 1.96;

/// Returns the sample mean, or NaN for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Returns the sample standard deviation (`N - 1` denominator).
/// Undefined, and therefore NaN, for fewer than two samples.
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(samples);
    let sum_sq = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

////////////////////////////////////////////////////////////////////////////////

/// Opens uniformly random sites of a fresh `size`-by-`size` grid until it
/// percolates. Returns the fraction of sites that ended up open.
///
/// Already open sites are redrawn.
pub fn run_trial<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(size)?;

    while !grid.percolates() {
        let row = rng.gen_range(1..=size);
        let col = rng.gen_range(1..=size);
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
        }
    }

    Ok(grid.number_of_open_sites() as f64 / (size * size) as f64)
}

////////////////////////////////////////////////////////////////////////////////

/// Percolation threshold estimates collected over independent trials.
#[derive(Debug, Clone, PartialEq)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent experiments on `size`-by-`size` grids,
    /// drawing sites from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `size` or `trials` is zero.
    pub fn run<R: Rng + ?Sized>(size: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument {
                name: "grid size",
                value: size,
            });
        }
        if trials == 0 {
            return Err(Error::InvalidArgument {
                name: "trial count",
                value: trials,
            });
        }

        log::info!("running {trials} trials on a {size}x{size} grid");

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = run_trial(size, rng)?;
            log::debug!("trial {trial}: threshold {threshold}");
            thresholds.push(threshold);
        }

        Ok(Self { thresholds })
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `thresholds` is empty.
    pub fn from_thresholds(thresholds: Vec<f64>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(Error::InvalidArgument {
                name: "trial count",
                value: 0,
            });
        }
        Ok(Self { thresholds })
    }

    /// Per-trial estimates, in the order the trials ran.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        stddev(&self.thresholds)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

////////////////////////////////////////////////////////////////////////////////
