// SPDX-License-Identifier: LGPL-3.0-or-later

//! Butterworth vs Bessel roll-off comparison.
//!
//! One call designs both filter families from the same [`FilterSpec`],
//! evaluates them on a shared [`FrequencyAxis`] and returns the two
//! labelled magnitude curves ready for charting.

use crate::axis::FrequencyAxis;
use crate::design::{
    design_lowpass_analog, design_lowpass_digital, DesignError, FilterFamily, FilterSpec,
};
use crate::units::hz_to_angular;

/// How the filters are designed and evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    /// Bilinear-transformed digital filters evaluated on the unit circle.
    Digital,
    /// Continuous-time filters evaluated along the imaginary axis.
    Analog,
}

/// One labelled magnitude curve over a frequency axis.
#[derive(Debug, Clone)]
pub struct ResponseCurve {
    label: String,
    frequencies: Vec<f64>,
    magnitude_db: Vec<f64>,
}

impl ResponseCurve {
    /// Legend label, e.g. "Butterworth Filter".
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Frequency points in Hz.
    #[inline]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Magnitude in dB, one value per frequency point.
    #[inline]
    pub fn magnitude_db(&self) -> &[f64] {
        &self.magnitude_db
    }
}

/// Result of comparing the two families on a common axis.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Butterworth magnitude curve.
    pub butterworth: ResponseCurve,
    /// Bessel magnitude curve.
    pub bessel: ResponseCurve,
    /// Shared cutoff frequency in Hz, for marking on a chart.
    pub cutoff_hz: f64,
}

fn curve(
    family: FilterFamily,
    spec: &FilterSpec,
    axis: &FrequencyAxis,
    mode: EvalMode,
) -> Result<ResponseCurve, DesignError> {
    let magnitude_db = match mode {
        EvalMode::Digital => {
            let filt = design_lowpass_digital(family, spec)?;
            filt.magnitude_db(axis.as_slice(), spec.sample_rate())
        }
        EvalMode::Analog => {
            let filt = design_lowpass_analog(family, spec)?;
            let angular: Vec<f64> = axis.as_slice().iter().map(|&f| hz_to_angular(f)).collect();
            filt.magnitude_db(&angular)
        }
    };
    Ok(ResponseCurve {
        label: format!("{} Filter", family.name()),
        frequencies: axis.as_slice().to_vec(),
        magnitude_db,
    })
}

/// Design and evaluate both families over `axis`.
///
/// Both curves share the axis frequencies in Hz regardless of `mode`;
/// analog evaluation converts to rad/s internally.
pub fn compare_lowpass(
    spec: &FilterSpec,
    axis: &FrequencyAxis,
    mode: EvalMode,
) -> Result<Comparison, DesignError> {
    let butterworth = curve(FilterFamily::Butterworth, spec, axis, mode)?;
    let bessel = curve(FilterFamily::Bessel, spec, axis, mode)?;
    Ok(Comparison {
        butterworth,
        bessel,
        cutoff_hz: spec.cutoff(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_share_axis_and_lengths() {
        let spec = FilterSpec::new(1000.0, 100.0, 8).unwrap();
        let axis = FrequencyAxis::linear(0.1, 500.0, 200).unwrap();
        let cmp = compare_lowpass(&spec, &axis, EvalMode::Digital).unwrap();

        assert_eq!(cmp.butterworth.frequencies(), axis.as_slice());
        assert_eq!(cmp.bessel.frequencies(), axis.as_slice());
        assert_eq!(cmp.butterworth.magnitude_db().len(), 200);
        assert_eq!(cmp.bessel.magnitude_db().len(), 200);
        assert_eq!(cmp.cutoff_hz, 100.0);
    }

    #[test]
    fn labels_name_the_families() {
        let spec = FilterSpec::new(1000.0, 100.0, 4).unwrap();
        let axis = FrequencyAxis::logarithmic(1.0, 1000.0, 50).unwrap();
        let cmp = compare_lowpass(&spec, &axis, EvalMode::Analog).unwrap();

        assert_eq!(cmp.butterworth.label(), "Butterworth Filter");
        assert_eq!(cmp.bessel.label(), "Bessel Filter");
    }

    #[test]
    fn butterworth_rolls_off_faster() {
        // At the top of the band the sharper Butterworth must sit far
        // below the gentler Bessel
        let spec = FilterSpec::new(1000.0, 100.0, 30).unwrap();
        let axis = FrequencyAxis::linear(0.1, 500.0, 500).unwrap();
        let cmp = compare_lowpass(&spec, &axis, EvalMode::Digital).unwrap();

        let butter_last = *cmp.butterworth.magnitude_db().last().unwrap();
        let bessel_last = *cmp.bessel.magnitude_db().last().unwrap();
        assert!(
            butter_last < bessel_last,
            "butterworth {butter_last} dB, bessel {bessel_last} dB"
        );
    }

    #[test]
    fn digital_mode_rejects_cutoff_at_nyquist() {
        let spec = FilterSpec::new(1000.0, 500.0, 4).unwrap();
        let axis = FrequencyAxis::linear(0.1, 499.0, 50).unwrap();
        assert!(matches!(
            compare_lowpass(&spec, &axis, EvalMode::Digital),
            Err(DesignError::CutoffAboveNyquist { .. })
        ));
        // Analog mode has no Nyquist constraint
        assert!(compare_lowpass(&spec, &axis, EvalMode::Analog).is_ok());
    }

    #[test]
    fn analog_curves_flat_well_below_cutoff() {
        let spec = FilterSpec::new(1000.0, 100.0, 4).unwrap();
        let axis = FrequencyAxis::logarithmic(1.0, 1000.0, 500).unwrap();
        let cmp = compare_lowpass(&spec, &axis, EvalMode::Analog).unwrap();

        let idx = axis.nearest_index(10.0);
        assert!(cmp.butterworth.magnitude_db()[idx].abs() < 1.0);
        assert!(cmp.bessel.magnitude_db()[idx].abs() < 1.0);
    }
}
