use sparkline_rs::api::InvalidationLevel;
use sparkline_rs::core::{NodeDatum, Point, SeriesDatum};
use sparkline_rs::extensions::{
    HighlightStyle, MarkerFormat, MarkerFormatterParams, MarkerOverlay, MarkerStyle,
};
use sparkline_rs::render::{Color, MarkerShape, NullRenderer};
use sparkline_rs::{ChartError, MiniAreaChart, MiniAreaChartOptions};

fn chart_with(values: &[f64], marker_size: f64) -> MiniAreaChart<NullRenderer> {
    let options = MiniAreaChartOptions {
        marker: MarkerStyle {
            size: marker_size,
            ..MarkerStyle::default()
        },
        ..MiniAreaChartOptions::default()
    };
    let mut chart = MiniAreaChart::new(NullRenderer::default(), options).expect("chart init");
    chart.set_data(values.iter().copied().map(Some).collect());
    chart.update();
    chart
}

fn marker_ids(chart: &MiniAreaChart<NullRenderer>) -> Vec<u64> {
    chart.markers().nodes().map(|node| node.id.get()).collect()
}

#[test]
fn shrinking_data_removes_trailing_markers_and_keeps_survivors() {
    let mut chart = chart_with(&[1.0, 2.0, 3.0, 4.0, 5.0], 2.0);
    let ids = marker_ids(&chart);
    assert_eq!(ids.len(), 5);

    chart.set_data(vec![Some(9.0), Some(8.0), Some(7.0)]);
    chart.update();

    assert_eq!(marker_ids(&chart), ids[..3].to_vec());
    for (node, datum) in chart.markers().nodes().zip(chart.node_data()) {
        assert_eq!(node.translation, datum.point);
    }
}

#[test]
fn growing_data_creates_fresh_markers_for_new_indices() {
    let mut chart = chart_with(&[1.0, 2.0], 2.0);
    let ids = marker_ids(&chart);

    chart.set_data(vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    chart.update();

    let grown = marker_ids(&chart);
    assert_eq!(grown.len(), 4);
    assert_eq!(grown[..2], ids[..]);
    assert!(grown[2..].iter().all(|id| !ids.contains(id)));
}

#[test]
fn shape_change_recreates_every_marker() {
    let mut chart = chart_with(&[1.0, 2.0, 3.0], 2.0);
    let ids = marker_ids(&chart);

    chart.set_marker_shape(MarkerShape::Square);
    assert!(chart.markers().is_empty());
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Layout);

    chart.flush();
    let recreated = marker_ids(&chart);
    assert_eq!(recreated.len(), 3);
    assert!(recreated.iter().all(|id| !ids.contains(id)));
    assert!(
        chart
            .markers()
            .nodes()
            .all(|node| node.visual.shape == MarkerShape::Square)
    );
}

#[test]
fn same_shape_keeps_markers() {
    let mut chart = chart_with(&[1.0, 2.0, 3.0], 2.0);
    let ids = marker_ids(&chart);

    chart.set_marker_shape(MarkerShape::Circle);
    assert_eq!(marker_ids(&chart), ids);
    assert!(!chart.needs_update());
}

#[test]
fn shape_name_is_parsed() {
    let mut chart = chart_with(&[1.0, 2.0], 2.0);
    chart.set_marker_shape_name("diamond").expect("known shape");
    assert_eq!(chart.marker_style().shape, MarkerShape::Diamond);

    let err = chart
        .set_marker_shape_name("hexagon")
        .expect_err("unknown shape");
    assert!(matches!(err, ChartError::UnknownMarkerShape(name) if name == "hexagon"));
    assert_eq!(chart.marker_style().shape, MarkerShape::Diamond);
}

#[test]
fn zero_size_markers_exist_but_are_hidden() {
    let chart = chart_with(&[1.0, 2.0, 3.0], 0.0);
    assert_eq!(chart.markers().len(), 3);
    assert!(chart.markers().nodes().all(|node| !node.visual.visible));
    assert!(chart.frame().markers.is_empty());
}

#[test]
fn disabled_markers_are_hidden() {
    let mut chart = chart_with(&[1.0, 2.0, 3.0], 4.0);
    chart.set_marker_enabled(false);
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Markers);
    assert_eq!(chart.flush(), InvalidationLevel::Markers);
    assert!(chart.markers().visible_primitives().is_empty());
}

#[test]
fn style_change_is_a_marker_only_invalidation() {
    let mut chart = chart_with(&[1.0, 2.0], 2.0);
    let red = Color::rgb(1.0, 0.0, 0.0);
    chart.set_marker_fill(Some(red)).expect("valid fill");
    chart.set_marker_stroke_width(2.5).expect("valid width");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Markers);

    chart.flush();
    for node in chart.markers().nodes() {
        assert_eq!(node.visual.fill, Some(red));
        assert_eq!(node.visual.stroke_width, 2.5);
    }
}

#[test]
fn formatter_overrides_and_can_force_visibility() {
    let mut chart = chart_with(&[1.0, -2.0, 3.0], 0.0);
    let green = Color::rgb(0.0, 1.0, 0.0);
    chart.set_marker_formatter(Some(Box::new(move |params: &MarkerFormatterParams<'_>| {
        if params.y_value.is_some_and(|y| y < 0.0) {
            MarkerFormat {
                enabled: Some(true),
                size: Some(5.0),
                fill: Some(green),
                ..MarkerFormat::default()
            }
        } else {
            MarkerFormat::default()
        }
    })));
    chart.flush();

    let visible = chart.markers().visible_primitives();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].size, 5.0);
    assert_eq!(visible[0].fill, Some(green));
    assert_eq!(visible[0].x, chart.node_data()[1].point.x);
}

#[test]
fn formatter_can_hide_a_marker() {
    let mut chart = chart_with(&[1.0, 2.0, 3.0], 3.0);
    chart.set_marker_formatter(Some(Box::new(|params: &MarkerFormatterParams<'_>| MarkerFormat {
        enabled: Some(params.datum.series_datum.y != Some(2.0)),
        ..MarkerFormat::default()
    })));
    chart.flush();

    assert_eq!(chart.markers().visible_primitives().len(), 2);
    assert!(!chart.markers().get(1).expect("marker 1").visual.visible);
}

#[test]
fn formatter_sees_highlight_resolved_values() {
    let mut chart = chart_with(&[1.0, 2.0], 2.0);
    chart.set_marker_formatter(Some(Box::new(|params: &MarkerFormatterParams<'_>| {
        assert_eq!(params.highlighted, params.size == 6.0);
        MarkerFormat::default()
    })));
    let target = chart.node_data()[0].clone();
    chart.highlight_datum(&target);

    assert!(chart.markers().get(0).expect("marker 0").visual.highlighted);
}

#[test]
fn invalid_marker_input_is_rejected() {
    let mut chart = chart_with(&[1.0, 2.0], 2.0);
    assert!(chart.set_marker_size(f64::NAN).is_err());
    assert!(chart.set_marker_stroke_width(-1.0).is_err());
    assert!(
        chart
            .set_highlight_style(HighlightStyle {
                stroke_width: Some(f64::INFINITY),
                ..HighlightStyle::default()
            })
            .is_err()
    );
    assert_eq!(chart.marker_style().size, 2.0);
    assert!(!chart.needs_update());
}

fn nodes(count: usize) -> Vec<NodeDatum> {
    (0..count)
        .map(|i| NodeDatum {
            series_datum: SeriesDatum::new(i as f64, Some(1.0)),
            point: Point::new(i as f64 * 10.0, 5.0),
        })
        .collect()
}

#[test]
fn overlay_reconcile_reports_created_and_removed_indices() {
    let mut overlay = MarkerOverlay::new(MarkerShape::Circle);

    let diff = overlay.reconcile(&nodes(5));
    assert_eq!(diff.created, vec![0, 1, 2, 3, 4]);
    assert!(diff.removed.is_empty());

    let diff = overlay.reconcile(&nodes(3));
    assert!(diff.created.is_empty());
    assert_eq!(diff.removed, vec![3, 4]);
    assert_eq!(overlay.len(), 3);

    assert!(overlay.reconcile(&nodes(3)).is_empty());
}

#[test]
fn shape_change_before_empty_update_rebuilds_markers_on_kept_nodes() {
    let mut chart = chart_with(&[1.0, 2.0, 3.0], 2.0);
    let ids = marker_ids(&chart);

    chart.set_marker_shape(MarkerShape::Square);
    chart.clear_data();
    chart.update();

    assert_eq!(chart.node_data().len(), 3);
    assert_eq!(chart.markers().len(), chart.node_data().len());
    let rebuilt = marker_ids(&chart);
    assert!(rebuilt.iter().all(|id| !ids.contains(id)));
    assert_eq!(chart.markers().visible_primitives().len(), 3);
    assert!(
        chart
            .markers()
            .nodes()
            .all(|node| node.visual.shape == MarkerShape::Square)
    );
}
