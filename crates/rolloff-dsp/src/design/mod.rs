// SPDX-License-Identifier: LGPL-3.0-or-later

//! Low-pass filter design.
//!
//! A validated [`FilterSpec`] plus a [`FilterFamily`] yields either a
//! [`sos::DigitalSos`] (bilinear transform, sample-rate aware) or an
//! [`sos::AnalogSos`] (frequency-scaled continuous-time filter). All
//! parameter validation lives here; the numerical layers below assume
//! valid input.

pub mod prototype;
pub mod sos;

use thiserror::Error;

use crate::consts::MAX_ORDER;
use crate::units::nyquist;

pub use prototype::PrototypePoles;
pub use sos::{AnalogSos, DigitalSos, Section};

/// Errors raised while validating or designing a filter.
#[derive(Debug, Error, PartialEq)]
pub enum DesignError {
    #[error("filter order must be at least 1")]
    ZeroOrder,

    #[error("filter order {0} exceeds the supported maximum {MAX_ORDER}")]
    OrderTooHigh(usize),

    #[error("sampling rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    #[error("cutoff frequency must be positive and finite, got {0}")]
    InvalidCutoff(f64),

    #[error("cutoff {cutoff} Hz must lie below the Nyquist frequency {nyquist} Hz")]
    CutoffAboveNyquist { cutoff: f64, nyquist: f64 },
}

/// Filter family to design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFamily {
    /// Maximally flat passband, monotonic and sharp roll-off.
    Butterworth,
    /// Maximally flat group delay, gentler magnitude roll-off.
    Bessel,
}

impl FilterFamily {
    /// Display name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            FilterFamily::Butterworth => "Butterworth",
            FilterFamily::Bessel => "Bessel",
        }
    }

    fn prototype(&self, order: usize) -> prototype::PrototypePoles {
        match self {
            FilterFamily::Butterworth => prototype::butterworth(order),
            FilterFamily::Bessel => prototype::bessel(order),
        }
    }
}

/// Immutable design parameters for one comparison run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    sample_rate: f64,
    cutoff: f64,
    order: usize,
}

impl FilterSpec {
    /// Validate and build a filter specification.
    ///
    /// The cutoff/Nyquist relationship is checked at digital design time,
    /// not here: an analog design is free to place the cutoff anywhere.
    pub fn new(sample_rate: f64, cutoff: f64, order: usize) -> Result<Self, DesignError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(DesignError::InvalidSampleRate(sample_rate));
        }
        if !(cutoff.is_finite() && cutoff > 0.0) {
            return Err(DesignError::InvalidCutoff(cutoff));
        }
        if order == 0 {
            return Err(DesignError::ZeroOrder);
        }
        if order > MAX_ORDER {
            return Err(DesignError::OrderTooHigh(order));
        }
        Ok(Self {
            sample_rate,
            cutoff,
            order,
        })
    }

    /// Sampling rate in Hz.
    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Cutoff frequency in Hz.
    #[inline]
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Filter order.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Nyquist frequency in Hz.
    #[inline]
    pub fn nyquist(&self) -> f64 {
        nyquist(self.sample_rate)
    }
}

/// Design a digital low-pass filter for the given family and spec.
///
/// Fails if the cutoff does not lie below Nyquist; the bilinear transform
/// has no image for frequencies at or beyond it.
pub fn design_lowpass_digital(
    family: FilterFamily,
    spec: &FilterSpec,
) -> Result<DigitalSos, DesignError> {
    if spec.cutoff >= spec.nyquist() {
        return Err(DesignError::CutoffAboveNyquist {
            cutoff: spec.cutoff,
            nyquist: spec.nyquist(),
        });
    }
    let proto = family.prototype(spec.order);
    Ok(DigitalSos::from_prototype(
        &proto,
        spec.cutoff,
        spec.sample_rate,
    ))
}

/// Design an analog low-pass filter for the given family and spec.
pub fn design_lowpass_analog(
    family: FilterFamily,
    spec: &FilterSpec,
) -> Result<AnalogSos, DesignError> {
    let proto = family.prototype(spec.order);
    Ok(AnalogSos::from_prototype(&proto, spec.cutoff))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_accepts_valid_parameters() {
        let spec = FilterSpec::new(1000.0, 100.0, 30).unwrap();
        assert_eq!(spec.sample_rate(), 1000.0);
        assert_eq!(spec.cutoff(), 100.0);
        assert_eq!(spec.order(), 30);
        assert_eq!(spec.nyquist(), 500.0);
    }

    #[test]
    fn spec_rejects_bad_sample_rate() {
        assert!(matches!(
            FilterSpec::new(0.0, 100.0, 4),
            Err(DesignError::InvalidSampleRate(_))
        ));
        assert!(matches!(
            FilterSpec::new(f64::NAN, 100.0, 4),
            Err(DesignError::InvalidSampleRate(_))
        ));
    }

    #[test]
    fn spec_rejects_bad_cutoff() {
        assert!(matches!(
            FilterSpec::new(1000.0, 0.0, 4),
            Err(DesignError::InvalidCutoff(_))
        ));
        assert!(matches!(
            FilterSpec::new(1000.0, -10.0, 4),
            Err(DesignError::InvalidCutoff(_))
        ));
    }

    #[test]
    fn spec_rejects_bad_order() {
        assert_eq!(FilterSpec::new(1000.0, 100.0, 0), Err(DesignError::ZeroOrder));
        assert_eq!(
            FilterSpec::new(1000.0, 100.0, MAX_ORDER + 1),
            Err(DesignError::OrderTooHigh(MAX_ORDER + 1))
        );
    }

    #[test]
    fn digital_design_enforces_nyquist() {
        // Valid as a spec, invalid for digital design
        let spec = FilterSpec::new(1000.0, 600.0, 4).unwrap();
        assert!(matches!(
            design_lowpass_digital(FilterFamily::Butterworth, &spec),
            Err(DesignError::CutoffAboveNyquist { .. })
        ));
        // The analog variant accepts it
        assert!(design_lowpass_analog(FilterFamily::Butterworth, &spec).is_ok());
    }

    #[test]
    fn design_produces_expected_section_count() {
        let spec = FilterSpec::new(1000.0, 100.0, 30).unwrap();
        for family in [FilterFamily::Butterworth, FilterFamily::Bessel] {
            let filt = design_lowpass_digital(family, &spec).unwrap();
            assert_eq!(filt.sections().len(), 15);
        }
    }

    #[test]
    fn family_names() {
        assert_eq!(FilterFamily::Butterworth.name(), "Butterworth");
        assert_eq!(FilterFamily::Bessel.name(), "Bessel");
    }
}
