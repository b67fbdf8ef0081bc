use criterion::{Criterion, criterion_group, criterion_main};
use sparkline_rs::core::{BandScale, LinearScale, SeriesKey, resolve_y_domain};
use sparkline_rs::extensions::MarkerStyle;
use sparkline_rs::render::NullRenderer;
use sparkline_rs::{MiniAreaChart, MiniAreaChartOptions};
use std::hint::black_box;

fn wave(count: usize) -> Vec<Option<f64>> {
    (0..count)
        .map(|i| {
            if i % 97 == 0 {
                None
            } else {
                Some((i as f64 * 0.05).sin() * 100.0)
            }
        })
        .collect()
}

fn bench_scale_convert(c: &mut Criterion) {
    let keys: Vec<SeriesKey> = (0..1_000).map(|i| SeriesKey::number(i as f64)).collect();
    let mut band = BandScale::new();
    band.set_domain(&keys);
    band.set_range(0.0, 1_920.0).expect("valid range");
    let linear = LinearScale::new((-100.0, 100.0), (1_080.0, 0.0)).expect("valid scale");

    c.bench_function("band_scale_convert_1k", |b| {
        b.iter(|| {
            for key in &keys {
                let _ = black_box(band.convert(black_box(key)));
            }
        })
    });

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = linear.convert(black_box(42.5));
            let _ = black_box(linear.invert(px));
        })
    });
}

fn bench_y_domain_10k(c: &mut Criterion) {
    let values = wave(10_000);
    c.bench_function("resolve_y_domain_10k", |b| {
        b.iter(|| resolve_y_domain(black_box(&values)))
    });
}

fn bench_update_1k(c: &mut Criterion) {
    let options = MiniAreaChartOptions {
        marker: MarkerStyle {
            size: 2.0,
            ..MarkerStyle::default()
        },
        ..MiniAreaChartOptions::default().with_size(1_600.0, 200.0)
    };
    let mut chart = MiniAreaChart::new(NullRenderer::default(), options).expect("chart init");
    let values = wave(1_000);

    c.bench_function("mini_area_chart_update_1k", |b| {
        b.iter(|| {
            chart.set_data(black_box(values.clone()));
            chart.update();
        })
    });
}

fn bench_frame_json_1k(c: &mut Criterion) {
    let mut chart = MiniAreaChart::new(NullRenderer::default(), MiniAreaChartOptions::default())
        .expect("chart init");
    chart.set_data(wave(1_000));
    chart.update();

    c.bench_function("frame_json_contract_1k", |b| {
        b.iter(|| {
            let _ = chart
                .frame_json_contract_v1_pretty()
                .expect("serialize frame");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_convert,
    bench_y_domain_10k,
    bench_update_1k,
    bench_frame_json_1k
);
criterion_main!(benches);
