// SPDX-License-Identifier: LGPL-3.0-or-later

//! Magnitude-response chart rendering.
//!
//! Draws both comparison curves on a log-frequency axis: Butterworth as a
//! solid blue line, Bessel as a dashed green line, with a dotted red
//! vertical marker at the cutoff frequency.

use anyhow::Context;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use rolloff_dsp::compare::Comparison;

/// Chart size in pixels.
pub const CHART_SIZE: (u32, u32) = (1000, 600);

/// Magnitudes below this are clamped so a single deep-stopband point does
/// not stretch the y range into unreadability.
pub const DISPLAY_FLOOR_DB: f64 = -120.0;

/// Render a comparison chart to a PNG file at `path`.
pub fn render_comparison(cmp: &Comparison, title: &str, path: &str) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    draw(&root, cmp, title).with_context(|| format!("rendering chart to {path}"))?;
    root.present()
        .with_context(|| format!("writing chart to {path}"))?;
    log::info!("wrote {path}");
    Ok(())
}

fn clamped(curve_db: &[f64]) -> impl Iterator<Item = f64> + Clone + '_ {
    curve_db.iter().map(|&db| db.max(DISPLAY_FLOOR_DB))
}

/// Draw the chart onto any drawing area. Split out from
/// [`render_comparison`] so tests can render into an in-memory buffer.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    cmp: &Comparison,
    title: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let freqs = cmp.butterworth.frequencies();
    let x_min = freqs[0];
    let x_max = freqs[freqs.len() - 1];

    let y_min = clamped(cmp.butterworth.magnitude_db())
        .chain(clamped(cmp.bessel.magnitude_db()))
        .fold(f64::INFINITY, f64::min);
    let y_range = (y_min - 5.0).min(-5.0)..5.0;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Magnitude (dB)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            freqs.iter().copied().zip(clamped(cmp.butterworth.magnitude_db())),
            BLUE.stroke_width(2),
        ))?
        .label(cmp.butterworth.label().to_owned())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            cmp.bessel
                .frequencies()
                .iter()
                .copied()
                .zip(clamped(cmp.bessel.magnitude_db())),
            8,
            4,
            GREEN.stroke_width(2),
        ))?
        .label(cmp.bessel.label().to_owned())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    // Dotted vertical marker at the cutoff
    if cmp.cutoff_hz > x_min && cmp.cutoff_hz < x_max {
        chart.draw_series(DashedLineSeries::new(
            [
                (cmp.cutoff_hz, y_range.start),
                (cmp.cutoff_hz, y_range.end),
            ],
            1,
            5,
            RED.stroke_width(1),
        ))?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .position(SeriesLabelPosition::LowerLeft)
        .draw()?;

    Ok(())
}
