// SPDX-License-Identifier: LGPL-3.0-or-later

//! Cascaded second-order sections.
//!
//! A designed filter is held as a cascade of at most second-order
//! sections rather than as one expanded polynomial pair: high-order
//! expanded coefficients span hundreds of orders of magnitude and are
//! useless in double precision, while the cascade stays well conditioned.
//! For odd orders the first section is first-order (trailing coefficients
//! zero).
//!
//! [`AnalogSos`] sections are polynomials in `s` (ascending powers);
//! [`DigitalSos`] sections are polynomials in `z^-1` (ascending powers,
//! denominator leading coefficient 1). Both expose the expanded
//! numerator/denominator transfer-function polynomials for callers that
//! want the flat form.

use num_complex::Complex64;

use super::prototype::PrototypePoles;
use crate::units::hz_to_angular;

/// One cascade stage: numerator and denominator coefficients in
/// ascending powers of the transform variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub b: [f64; 3],
    pub a: [f64; 3],
}

/// Analog low-pass filter as cascaded sections in `s`.
#[derive(Debug, Clone)]
pub struct AnalogSos {
    sections: Vec<Section>,
}

/// Digital low-pass filter as cascaded sections in `z^-1`.
#[derive(Debug, Clone)]
pub struct DigitalSos {
    sections: Vec<Section>,
}

impl AnalogSos {
    /// Frequency-scale a unity-cutoff prototype to `cutoff` Hz.
    ///
    /// Each conjugate pair becomes `|q|^2 / (s^2 - 2*Re(q)*s + |q|^2)`
    /// and a real pole becomes `-q / (s - q)`, so every section has DC
    /// gain 1.
    pub(crate) fn from_prototype(proto: &PrototypePoles, cutoff: f64) -> Self {
        let wc = hz_to_angular(cutoff);
        let mut sections = Vec::with_capacity(proto.pairs.len() + 1);

        if let Some(r) = proto.real {
            let q = r * wc;
            sections.push(Section {
                b: [-q, 0.0, 0.0],
                a: [-q, 1.0, 0.0],
            });
        }
        for p in &proto.pairs {
            let q = *p * wc;
            sections.push(Section {
                b: [q.norm_sqr(), 0.0, 0.0],
                a: [q.norm_sqr(), -2.0 * q.re, 1.0],
            });
        }
        Self { sections }
    }

    /// Cascade stages in processing order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Expanded `(numerator, denominator)` polynomials in ascending
    /// powers of `s`.
    pub fn transfer_function(&self) -> (Vec<f64>, Vec<f64>) {
        expand(&self.sections)
    }
}

impl DigitalSos {
    /// Map a unity-cutoff prototype to the z-plane via the bilinear
    /// transform with cutoff pre-warping `wc = tan(pi*fc/fs)`.
    ///
    /// Every prototype pole `p` maps to `z = (1 + p*wc) / (1 - p*wc)`;
    /// low-pass zeros land at z = -1. Section gains are chosen for DC
    /// gain 1.
    pub(crate) fn from_prototype(proto: &PrototypePoles, cutoff: f64, sample_rate: f64) -> Self {
        let wc = (std::f64::consts::PI * cutoff / sample_rate).tan();
        let mut sections = Vec::with_capacity(proto.pairs.len() + 1);

        if let Some(r) = proto.real {
            let zp = (1.0 + r * wc) / (1.0 - r * wc);
            let a1 = -zp;
            let g = (1.0 + a1) / 2.0;
            sections.push(Section {
                b: [g, g, 0.0],
                a: [1.0, a1, 0.0],
            });
        }
        for p in &proto.pairs {
            let pw = *p * wc;
            let zp = (Complex64::new(1.0, 0.0) + pw) / (Complex64::new(1.0, 0.0) - pw);
            let a1 = -2.0 * zp.re;
            let a2 = zp.norm_sqr();
            let g = (1.0 + a1 + a2) / 4.0;
            sections.push(Section {
                b: [g, 2.0 * g, g],
                a: [1.0, a1, a2],
            });
        }
        Self { sections }
    }

    /// Cascade stages in processing order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Expanded `(numerator, denominator)` polynomials in ascending
    /// powers of `z^-1`.
    ///
    /// Only meaningful for modest orders; see the module docs.
    pub fn transfer_function(&self) -> (Vec<f64>, Vec<f64>) {
        expand(&self.sections)
    }
}

fn expand(sections: &[Section]) -> (Vec<f64>, Vec<f64>) {
    let mut num = vec![1.0];
    let mut den = vec![1.0];
    for s in sections {
        num = poly_mul(&num, trim(&s.b));
        den = poly_mul(&den, trim(&s.a));
    }
    (num, den)
}

/// Drop trailing zero coefficients so first-order sections multiply in
/// at the right degree.
fn trim(coeffs: &[f64; 3]) -> &[f64] {
    let mut len = coeffs.len();
    while len > 1 && coeffs[len - 1] == 0.0 {
        len -= 1;
    }
    &coeffs[..len]
}

fn poly_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}
