// SPDX-License-Identifier: LGPL-3.0-or-later

//! Numeric constants shared across the crate.

/// Default number of points on a frequency axis.
pub const DEFAULT_AXIS_POINTS: usize = 500;

/// Half-power level in decibels: `20*log10(1/sqrt(2))`.
pub const DB_MINUS_3: f64 = -3.010_299_956_639_812;

/// Maximum supported filter order.
///
/// The Bessel pole solver operates on `f64` reverse Bessel polynomial
/// coefficients; beyond this order the coefficients lose too much
/// precision for the roots to be trustworthy.
pub const MAX_ORDER: usize = 48;
