// SPDX-License-Identifier: LGPL-3.0-or-later

//! Normalized analog low-pass prototypes.
//!
//! Both filter families are produced as pole sets of a unity-cutoff analog
//! prototype with DC gain 1, later frequency-scaled (analog) or mapped
//! through the bilinear transform (digital).
//!
//! Butterworth poles sit on the unit circle in the left half of the
//! s-plane: `-sin(theta) +/- j*cos(theta)` with
//! `theta = pi*(2k + 1) / (2N)`.
//!
//! Bessel poles are the roots of the reverse Bessel polynomial
//! `theta_N(s)`, found with an Aberth–Ehrlich simultaneous iteration and
//! then rescaled so the magnitude response crosses -3 dB at the unit
//! cutoff. That keeps the cutoff convention identical for both families,
//! so their curves are directly comparable on one chart.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use num_complex::Complex64;

/// Poles of a normalized analog low-pass prototype.
///
/// Conjugate pairs are stored once with positive imaginary part; odd
/// orders carry one additional real pole. All poles lie in the left
/// half-plane.
#[derive(Debug, Clone)]
pub struct PrototypePoles {
    /// One pole per conjugate pair, imaginary part > 0.
    pub pairs: Vec<Complex64>,
    /// Real pole, present for odd orders.
    pub real: Option<f64>,
}

impl PrototypePoles {
    /// Filter order represented by this pole set.
    pub fn order(&self) -> usize {
        2 * self.pairs.len() + usize::from(self.real.is_some())
    }

    /// Magnitude of the prototype response at angular frequency `w`,
    /// with DC gain normalized to 1.
    pub fn magnitude_at(&self, w: f64) -> f64 {
        let jw = Complex64::new(0.0, w);
        let mut mag = 1.0;
        for p in &self.pairs {
            mag *= p.norm_sqr() / ((jw - p).norm() * (jw - p.conj()).norm());
        }
        if let Some(r) = self.real {
            mag *= r.abs() / (jw - r).norm();
        }
        mag
    }
}

/// Butterworth prototype of the given order.
///
/// Poles are placed on the unit circle at angles
/// `theta = pi*(2k + 1) / (2N)` from the imaginary axis; odd orders get a
/// real pole at s = -1. The -3 dB point falls at w = 1 by construction.
pub fn butterworth(order: usize) -> PrototypePoles {
    let n = order;
    let pairs = (0..n / 2)
        .map(|k| {
            let theta = PI * (2 * k + 1) as f64 / (2 * n) as f64;
            Complex64::new(-theta.sin(), theta.cos())
        })
        .collect();
    let real = (n % 2 == 1).then_some(-1.0);
    PrototypePoles { pairs, real }
}

/// Bessel prototype of the given order, -3 dB at w = 1.
///
/// The delay-normalized poles (roots of the reverse Bessel polynomial)
/// are computed first, then every pole is divided by the frequency at
/// which that pole set reaches half power.
pub fn bessel(order: usize) -> PrototypePoles {
    let delay_normed = bessel_delay_normalized(order);
    let w3 = half_power_frequency(&delay_normed);
    PrototypePoles {
        pairs: delay_normed.pairs.iter().map(|p| *p / w3).collect(),
        real: delay_normed.real.map(|r| r / w3),
    }
}

/// Delay-normalized Bessel poles: roots of the reverse Bessel polynomial.
fn bessel_delay_normalized(order: usize) -> PrototypePoles {
    if order == 1 {
        // theta_1(s) = s + 1
        return PrototypePoles {
            pairs: Vec::new(),
            real: Some(-1.0),
        };
    }

    let coeffs = reverse_bessel_coeffs(order);
    let mut roots = aberth_roots(&coeffs);
    for z in &mut roots {
        *z = newton_polish(&coeffs, *z);
    }

    // Odd orders have exactly one real root; identify it as the root
    // closest to the real axis.
    let mut real = None;
    if order % 2 == 1 {
        let idx = roots
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.im.abs().total_cmp(&b.im.abs()))
            .map(|(i, _)| i)
            .unwrap_or(0);
        real = Some(roots.swap_remove(idx).re);
    }

    // Keep one member of each conjugate pair.
    let mut pairs: Vec<Complex64> = roots
        .into_iter()
        .filter(|z| z.im > 0.0)
        .map(|z| Complex64::new(z.re, z.im.abs()))
        .collect();
    pairs.sort_by(|a, b| a.im.total_cmp(&b.im));

    PrototypePoles { pairs, real }
}

/// Coefficients of the reverse Bessel polynomial `theta_n(s)` in
/// ascending powers of s, from the recurrence
/// `theta_n = (2n - 1)*theta_{n-1} + s^2 * theta_{n-2}`.
fn reverse_bessel_coeffs(order: usize) -> Vec<f64> {
    let mut prev = vec![1.0]; // theta_0
    let mut cur = vec![1.0, 1.0]; // theta_1
    if order == 0 {
        return prev;
    }
    for n in 2..=order {
        let mut next = vec![0.0; n + 1];
        let scale = (2 * n - 1) as f64;
        for (k, &c) in cur.iter().enumerate() {
            next[k] += scale * c;
        }
        for (k, &c) in prev.iter().enumerate() {
            next[k + 2] += c;
        }
        prev = cur;
        cur = next;
    }
    cur
}

/// Evaluate a real-coefficient polynomial (ascending powers) and its
/// derivative at a complex point.
fn eval_with_derivative(coeffs: &[f64], z: Complex64) -> (Complex64, Complex64) {
    let n = coeffs.len() - 1;
    let mut p = Complex64::new(coeffs[n], 0.0);
    let mut dp = Complex64::new(0.0, 0.0);
    for &c in coeffs[..n].iter().rev() {
        dp = dp * z + p;
        p = p * z + c;
    }
    (p, dp)
}

/// All complex roots of a real-coefficient polynomial via the
/// Aberth–Ehrlich simultaneous iteration.
///
/// Initial guesses sit on a circle whose radius is the geometric mean of
/// the root magnitudes, with a small angular offset so the starting set
/// is not mirror-symmetric about the real axis.
fn aberth_roots(coeffs: &[f64]) -> Vec<Complex64> {
    const MAX_ITERS: usize = 400;
    const TOL: f64 = 1e-13;

    let n = coeffs.len() - 1;
    let lead = coeffs[n];
    let monic: Vec<f64> = coeffs.iter().map(|c| c / lead).collect();

    let radius = monic[0].abs().powf(1.0 / n as f64).max(1e-3);
    let mut z: Vec<Complex64> = (0..n)
        .map(|k| Complex64::from_polar(radius, 2.0 * PI * k as f64 / n as f64 + 0.4))
        .collect();

    for _ in 0..MAX_ITERS {
        let mut converged = true;
        for j in 0..n {
            let (p, dp) = eval_with_derivative(&monic, z[j]);
            if p.norm() == 0.0 {
                continue;
            }
            if dp.norm() == 0.0 {
                // Sitting on a stationary point; nudge off it
                z[j] += Complex64::new(1e-8, 1e-8);
                converged = false;
                continue;
            }
            let newton = p / dp;
            let mut repulsion = Complex64::new(0.0, 0.0);
            for k in 0..n {
                if k != j {
                    repulsion += (z[j] - z[k]).inv();
                }
            }
            let denom = Complex64::new(1.0, 0.0) - newton * repulsion;
            let step = if denom.norm() > f64::MIN_POSITIVE {
                newton / denom
            } else {
                newton
            };
            z[j] -= step;
            if step.norm() > TOL * z[j].norm().max(1.0) {
                converged = false;
            }
        }
        if converged {
            break;
        }
    }
    z
}

/// A few Newton iterations to tighten a root estimate.
fn newton_polish(coeffs: &[f64], mut z: Complex64) -> Complex64 {
    for _ in 0..8 {
        let (p, dp) = eval_with_derivative(coeffs, z);
        if dp.norm() == 0.0 || p.norm() == 0.0 {
            break;
        }
        let step = p / dp;
        z -= step;
        if step.norm() <= 1e-15 * z.norm().max(1.0) {
            break;
        }
    }
    z
}

/// Angular frequency at which the pole set's magnitude response drops to
/// half power (1/sqrt(2)), found by bisection.
///
/// The magnitude of an all-pole low-pass is monotone decreasing, so the
/// bracket [0, hi] always contains exactly one crossing.
fn half_power_frequency(poles: &PrototypePoles) -> f64 {
    let target = FRAC_1_SQRT_2;

    let mut hi = 1.0;
    while poles.magnitude_at(hi) > target {
        hi *= 2.0;
    }
    let mut lo = 0.0;
    for _ in 0..100 {
        let mid = 0.5 * (lo + hi);
        if poles.magnitude_at(mid) > target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
