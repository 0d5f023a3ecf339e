// SPDX-License-Identifier: LGPL-3.0-or-later

//! Renders two Butterworth-vs-Bessel roll-off charts:
//!
//! - `rolloff_digital.png`: order-30 digital filters on a linear axis up
//!   to Nyquist
//! - `rolloff_analog.png`: order-4 analog filters over three decades

mod chart;

use rolloff_dsp::axis::FrequencyAxis;
use rolloff_dsp::compare::{compare_lowpass, EvalMode};
use rolloff_dsp::consts::DEFAULT_AXIS_POINTS;
use rolloff_dsp::design::FilterSpec;

const SAMPLE_RATE: f64 = 1000.0;
const CUTOFF: f64 = 100.0;
const DIGITAL_ORDER: usize = 30;
const ANALOG_ORDER: usize = 4;
const POINTS: usize = DEFAULT_AXIS_POINTS;

const TITLE: &str = "Frequency Response: Butterworth vs Bessel Filter";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let spec = FilterSpec::new(SAMPLE_RATE, CUTOFF, DIGITAL_ORDER)?;
    let axis = FrequencyAxis::linear(0.1, SAMPLE_RATE / 2.0, POINTS)?;
    log::debug!(
        "digital comparison: order {DIGITAL_ORDER}, cutoff {CUTOFF} Hz at {SAMPLE_RATE} Hz"
    );
    let cmp = compare_lowpass(&spec, &axis, EvalMode::Digital)?;
    chart::render_comparison(&cmp, TITLE, "rolloff_digital.png")?;

    let spec = FilterSpec::new(SAMPLE_RATE, CUTOFF, ANALOG_ORDER)?;
    let axis = FrequencyAxis::logarithmic(1.0, 1000.0, POINTS)?;
    log::debug!("analog comparison: order {ANALOG_ORDER}, cutoff {CUTOFF} Hz");
    let cmp = compare_lowpass(&spec, &axis, EvalMode::Analog)?;
    chart::render_comparison(&cmp, TITLE, "rolloff_analog.png")?;

    Ok(())
}
