// SPDX-License-Identifier: LGPL-3.0-or-later

//! Unit conversion functions.
//!
//! Conversions between linear gain, power and decibels, and between
//! ordinary frequency (Hz) and angular frequency (rad/s).

use std::f64::consts::TAU;

/// Convert linear gain (amplitude ratio) to decibels.
///
/// # Arguments
/// * `gain` - Linear gain (amplitude ratio)
///
/// # Returns
/// Level in decibels
#[inline]
pub fn gain_to_db(gain: f64) -> f64 {
    20.0 * gain.log10()
}

/// Convert decibels to linear gain (amplitude ratio).
///
/// # Arguments
/// * `db` - Level in decibels
///
/// # Returns
/// Linear gain (amplitude ratio)
#[inline]
pub fn db_to_gain(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert power ratio to decibels.
///
/// # Arguments
/// * `pwr` - Power ratio
///
/// # Returns
/// Level in decibels
#[inline]
pub fn power_to_db(pwr: f64) -> f64 {
    10.0 * pwr.log10()
}

/// Convert ordinary frequency in Hz to angular frequency in rad/s.
///
/// # Arguments
/// * `hz` - Frequency in Hz
///
/// # Returns
/// Angular frequency in rad/s
#[inline]
pub fn hz_to_angular(hz: f64) -> f64 {
    hz * TAU
}

/// Convert angular frequency in rad/s to ordinary frequency in Hz.
///
/// # Arguments
/// * `w` - Angular frequency in rad/s
///
/// # Returns
/// Frequency in Hz
#[inline]
pub fn angular_to_hz(w: f64) -> f64 {
    w / TAU
}

/// Nyquist frequency for a given sampling rate.
///
/// # Arguments
/// * `sample_rate` - Sampling rate in Hz
///
/// # Returns
/// Half the sampling rate, in Hz
#[inline]
pub fn nyquist(sample_rate: f64) -> f64 {
    sample_rate / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_gain_db_conversion() {
        // 0 dB = gain of 1.0
        assert!((gain_to_db(1.0)).abs() < EPSILON);
        assert!((db_to_gain(0.0) - 1.0).abs() < EPSILON);

        // 1/sqrt(2) = half power = -3.01 dB
        assert!((gain_to_db(FRAC_1_SQRT_2) - crate::consts::DB_MINUS_3).abs() < EPSILON);

        // Roundtrip
        let db = -42.5;
        assert!((gain_to_db(db_to_gain(db)) - db).abs() < 1e-9);
    }

    #[test]
    fn test_power_db_conversion() {
        // Power ratio of 2 = +3.01 dB
        assert!((power_to_db(2.0) - 3.010_299_956_639_812).abs() < EPSILON);
        // Power and amplitude conventions agree: |H|^2 in power dB == |H| in gain dB
        let h = 0.25;
        assert!((power_to_db(h * h) - gain_to_db(h)).abs() < EPSILON);
    }

    #[test]
    fn test_angular_conversion() {
        // 1 Hz = 2*pi rad/s
        assert!((hz_to_angular(1.0) - std::f64::consts::TAU).abs() < EPSILON);
        assert!((angular_to_hz(std::f64::consts::TAU) - 1.0).abs() < EPSILON);

        // Roundtrip
        let f = 123.456;
        assert!((angular_to_hz(hz_to_angular(f)) - f).abs() < 1e-9);
    }

    #[test]
    fn test_nyquist() {
        assert_eq!(nyquist(1000.0), 500.0);
        assert_eq!(nyquist(48000.0), 24000.0);
    }

    #[test]
    fn test_gain_to_db_edge_cases() {
        // Zero gain is -inf dB
        let db = gain_to_db(0.0);
        assert!(db.is_infinite() && db.is_sign_negative());

        // Negative gain has no dB value
        assert!(gain_to_db(-1.0).is_nan());
    }
}
