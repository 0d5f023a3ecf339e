// SPDX-License-Identifier: LGPL-3.0-or-later

//! # rolloff-dsp
//!
//! Low-pass filter design and frequency-response evaluation for comparing
//! the roll-off behaviour of Butterworth and Bessel filters.
//!
//! The crate covers the full pipeline behind a magnitude-response chart:
//!
//! - **Design**: Butterworth (maximally flat passband) and Bessel
//!   (maximally flat group delay) low-pass filters of arbitrary order,
//!   represented as cascaded second-order sections
//! - **Evaluation**: digital ([`response`] `freqz`, sample-rate aware) and
//!   analog (`freqs`, angular frequency in rad/s) complex responses
//! - **Comparison**: [`compare`] produces decibel magnitude curves for both
//!   families over a shared [`axis::FrequencyAxis`]
//!
//! Rendering lives in the companion `rolloff-plot` crate.

// Foundational modules
pub mod axis;
pub mod consts;
pub mod units;

// Design and evaluation
pub mod compare;
pub mod design;
pub mod response;
