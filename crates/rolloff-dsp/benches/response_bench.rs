// SPDX-License-Identifier: LGPL-3.0-or-later

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rolloff_dsp::axis::FrequencyAxis;
use rolloff_dsp::compare::{compare_lowpass, EvalMode};
use rolloff_dsp::design::{design_lowpass_digital, FilterFamily, FilterSpec};

fn bench_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("design_digital");
    for order in [8usize, 30] {
        let spec = FilterSpec::new(1000.0, 100.0, order).unwrap();
        group.bench_with_input(BenchmarkId::new("bessel", order), &spec, |b, spec| {
            b.iter(|| design_lowpass_digital(FilterFamily::Bessel, spec).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("butterworth", order), &spec, |b, spec| {
            b.iter(|| design_lowpass_digital(FilterFamily::Butterworth, spec).unwrap());
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_500_points");
    let axis = FrequencyAxis::linear(0.1, 500.0, 500).unwrap();
    for order in [8usize, 30] {
        let spec = FilterSpec::new(1000.0, 100.0, order).unwrap();
        group.bench_with_input(BenchmarkId::new("digital", order), &spec, |b, spec| {
            b.iter(|| compare_lowpass(spec, &axis, EvalMode::Digital).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_design, bench_compare);
criterion_main!(benches);
