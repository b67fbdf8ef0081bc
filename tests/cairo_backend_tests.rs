#![cfg(feature = "cairo-backend")]

use sparkline_rs::extensions::MarkerStyle;
use sparkline_rs::render::{CairoRenderer, MarkerShape};
use sparkline_rs::{MiniAreaChart, MiniAreaChartOptions};

#[test]
fn cairo_renderer_draws_every_layer() {
    let options = MiniAreaChartOptions {
        marker: MarkerStyle {
            size: 3.0,
            shape: MarkerShape::Diamond,
            ..MarkerStyle::default()
        },
        ..MiniAreaChartOptions::default().with_size(120.0, 40.0)
    };
    let renderer = CairoRenderer::new(120, 40).expect("cairo renderer");
    let mut chart = MiniAreaChart::new(renderer, options).expect("chart init");
    chart.set_data(vec![Some(2.0), None, Some(-1.0), Some(4.0)]);

    chart.render().expect("render");
    let stats = chart.renderer().last_stats();
    assert_eq!(stats.paths_drawn, 2);
    assert_eq!(stats.lines_drawn, 1);
    assert_eq!(stats.markers_drawn, 4);
}

#[test]
fn cairo_renderer_rejects_empty_surface() {
    assert!(CairoRenderer::new(0, 10).is_err());
}
