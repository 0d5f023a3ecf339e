// SPDX-License-Identifier: LGPL-3.0-or-later

//! Frequency axis construction.
//!
//! A [`FrequencyAxis`] is an ordered sequence of strictly positive
//! frequency sample points with its length fixed at construction. Linear
//! spacing suits digital evaluation up to Nyquist; geometric spacing suits
//! log-frequency charts and analog evaluation over several decades.

use thiserror::Error;

/// Errors raised while constructing a frequency axis.
#[derive(Debug, Error, PartialEq)]
pub enum AxisError {
    /// The axis would contain zero or negative frequencies, which have no
    /// place on a log-frequency chart.
    #[error("axis bounds must be positive, got [{start}, {end}]")]
    NonPositiveBound { start: f64, end: f64 },

    /// End does not lie above start.
    #[error("axis end {end} must be greater than start {start}")]
    EmptyRange { start: f64, end: f64 },

    /// Fewer than two points cannot describe a range.
    #[error("axis needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

/// Ordered sequence of positive frequency sample points.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAxis {
    points: Vec<f64>,
}

impl FrequencyAxis {
    /// Build a linearly spaced axis over `[start, end]`, inclusive.
    ///
    /// # Arguments
    /// * `start` - First frequency in Hz, must be positive
    /// * `end` - Last frequency in Hz, must exceed `start`
    /// * `n` - Number of points, at least 2
    pub fn linear(start: f64, end: f64, n: usize) -> Result<Self, AxisError> {
        Self::validate(start, end, n)?;
        let step = (end - start) / (n - 1) as f64;
        let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
        // Pin the last point to the exact upper bound
        points[n - 1] = end;
        Ok(Self { points })
    }

    /// Build a geometrically (logarithmically) spaced axis over
    /// `[start, end]`, inclusive.
    ///
    /// # Arguments
    /// * `start` - First frequency in Hz, must be positive
    /// * `end` - Last frequency in Hz, must exceed `start`
    /// * `n` - Number of points, at least 2
    pub fn logarithmic(start: f64, end: f64, n: usize) -> Result<Self, AxisError> {
        Self::validate(start, end, n)?;
        let log_step = (end.ln() - start.ln()) / (n - 1) as f64;
        let mut points: Vec<f64> = (0..n)
            .map(|i| (start.ln() + i as f64 * log_step).exp())
            .collect();
        points[0] = start;
        points[n - 1] = end;
        Ok(Self { points })
    }

    fn validate(start: f64, end: f64, n: usize) -> Result<(), AxisError> {
        if !(start > 0.0 && end > 0.0) {
            return Err(AxisError::NonPositiveBound { start, end });
        }
        if end <= start {
            return Err(AxisError::EmptyRange { start, end });
        }
        if n < 2 {
            return Err(AxisError::TooFewPoints(n));
        }
        Ok(())
    }

    /// Frequency points in Hz.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Number of points on the axis.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: construction requires at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the axis point closest to `freq`.
    pub fn nearest_index(&self, freq: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, &f) in self.points.iter().enumerate() {
            let dist = (f - freq).abs();
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best
    }
}
