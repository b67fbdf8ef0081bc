use sparkline_rs::core::Point;
use sparkline_rs::extensions::{HighlightStyle, MarkerStyle, MarkerVisual};
use sparkline_rs::render::{Color, NullRenderer};
use sparkline_rs::{MiniAreaChart, MiniAreaChartOptions};

fn chart() -> MiniAreaChart<NullRenderer> {
    let options = MiniAreaChartOptions {
        marker: MarkerStyle {
            size: 2.0,
            ..MarkerStyle::default()
        },
        ..MiniAreaChartOptions::default()
    };
    let mut chart = MiniAreaChart::new(NullRenderer::default(), options).expect("chart init");
    chart.set_data(vec![Some(1.0), Some(4.0), Some(2.0), Some(3.0)]);
    chart.update();
    chart
}

fn visuals(chart: &MiniAreaChart<NullRenderer>) -> Vec<MarkerVisual> {
    chart.markers().nodes().map(|node| node.visual).collect()
}

#[test]
fn highlight_applies_style_to_matching_marker_only() {
    let mut chart = chart();
    let target = chart.node_data()[1].clone();
    chart.highlight_datum(&target);

    let style = HighlightStyle::default();
    let highlighted = chart.markers().get(1).expect("marker 1").visual;
    assert!(highlighted.highlighted);
    assert_eq!(Some(highlighted.size), style.size);
    assert_eq!(highlighted.fill, style.fill);
    assert_eq!(highlighted.stroke, style.stroke);

    let other = chart.markers().get(0).expect("marker 0").visual;
    assert!(!other.highlighted);
    assert_eq!(other.size, 2.0);
    assert_eq!(chart.highlighted_datum(), Some(&target));
}

#[test]
fn dehighlight_restores_previous_visuals() {
    let mut chart = chart();
    let before = visuals(&chart);

    let target = chart.node_data()[2].clone();
    chart.highlight_datum(&target);
    assert_ne!(visuals(&chart), before);

    chart.dehighlight_datum();
    assert_eq!(visuals(&chart), before);
    assert_eq!(chart.highlighted_point(), None);
}

#[test]
fn unset_highlight_fields_keep_marker_values() {
    let mut chart = chart();
    let blue = Color::rgb(0.0, 0.0, 1.0);
    chart
        .set_highlight_style(HighlightStyle {
            size: None,
            fill: Some(blue),
            stroke: None,
            stroke_width: None,
        })
        .expect("valid highlight style");
    let target = chart.node_data()[0].clone();
    chart.highlight_datum(&target);

    let visual = chart.markers().get(0).expect("marker 0").visual;
    let marker = chart.marker_style();
    assert_eq!(visual.size, marker.size);
    assert_eq!(visual.fill, Some(blue));
    assert_eq!(visual.stroke, marker.stroke);
}

#[test]
fn highlight_survives_data_refresh_while_point_matches() {
    let mut chart = chart();
    let target = chart.node_data()[1].clone();
    chart.highlight_datum(&target);

    chart.set_data(vec![Some(1.0), Some(4.0), Some(2.0), Some(3.0)]);
    chart.update();
    assert!(chart.markers().get(1).expect("marker 1").visual.highlighted);

    chart.set_data(vec![Some(1.0), Some(2.0), Some(2.0), Some(3.0)]);
    chart.update();
    assert!(chart.markers().nodes().all(|node| !node.visual.highlighted));
    assert_eq!(chart.highlighted_datum(), None);
}

#[test]
fn highlighting_an_unknown_point_changes_nothing_visible() {
    let mut chart = chart();
    let before = visuals(&chart);
    chart.highlight_point(Point::new(-100.0, -100.0));
    assert_eq!(visuals(&chart), before);
}

#[test]
fn pointer_move_highlights_closest_node_by_x() {
    let mut chart = chart();
    let rect = chart.series_rect();
    let node_x = chart.node_data()[2].point.x;

    let index = chart.on_pointer_move(rect.x + node_x + 1.0, rect.y + 90.0);
    assert_eq!(index, Some(2));
    assert_eq!(chart.highlighted_point(), Some(chart.node_data()[2].point));
    assert_eq!(
        chart.interaction().cursor(),
        Some(Point::new(rect.x + node_x + 1.0, rect.y + 90.0))
    );

    chart.on_pointer_leave();
    assert_eq!(chart.highlighted_point(), None);
    assert_eq!(chart.interaction().cursor(), None);
    assert!(chart.markers().nodes().all(|node| !node.visual.highlighted));
}

#[test]
fn pick_closest_datum_translates_chart_coordinates() {
    let chart = chart();
    let rect = chart.series_rect();
    let first = chart.node_data()[0].point;

    let picked = chart
        .pick_closest_datum(rect.x + first.x - 5.0, 0.0)
        .expect("picked datum");
    assert_eq!(picked.point, first);
}

#[test]
fn pointer_without_data_picks_nothing() {
    let mut chart =
        MiniAreaChart::new(NullRenderer::default(), MiniAreaChartOptions::default())
            .expect("chart init");
    assert_eq!(chart.on_pointer_move(10.0, 10.0), None);
    assert_eq!(chart.highlighted_point(), None);
}
