use sparkline_rs::api::{SPARKLINE_FRAME_JSON_SCHEMA_V1, SparklineFrameJsonContractV1};
use sparkline_rs::core::SeriesKey;
use sparkline_rs::render::{Color, MarkerShape, NullRenderer, SparklineFrame};
use sparkline_rs::{ChartError, MiniAreaChart, MiniAreaChartOptions};

fn rendered_chart() -> MiniAreaChart<NullRenderer> {
    let options = MiniAreaChartOptions::from_json_str(
        r#"{ "width": 120, "height": 40, "marker": { "size": 3, "shape": "diamond" } }"#,
    )
    .expect("valid options");
    let mut chart = MiniAreaChart::new(NullRenderer::default(), options).expect("chart init");
    chart.set_xy_data(vec![
        (SeriesKey::category("mon"), Some(3.0)),
        (SeriesKey::category("tue"), Some(-1.5)),
        (SeriesKey::category("wed"), None),
        (SeriesKey::category("thu"), Some(6.0)),
    ]);
    chart.render().expect("render");
    chart
}

#[test]
fn options_json_fills_unset_fields_with_defaults() {
    let options = MiniAreaChartOptions::from_json_str(
        r##"{ "width": 120, "marker": { "size": 3, "shape": "square", "fill": "#ff0000" } }"##,
    )
    .expect("valid options");

    assert_eq!(options.width, 120.0);
    assert_eq!(options.height, 100.0);
    assert_eq!(options.marker.size, 3.0);
    assert_eq!(options.marker.shape, MarkerShape::Square);
    assert_eq!(options.marker.fill, Some(Color::rgb(1.0, 0.0, 0.0)));
    assert!(options.marker.enabled);
    assert!(options.tooltip.enabled);
}

#[test]
fn options_json_round_trips() {
    let mut options = MiniAreaChartOptions::default().with_size(80.0, 20.0);
    options.title = Some("Visits".to_owned());
    let json = options.to_json_pretty().expect("serialize options");
    assert!(json.contains("\"fill\": \"rgba(124, 181, 236, 0.25)\""));

    let parsed = MiniAreaChartOptions::from_json_str(&json).expect("parse options");
    assert_eq!(parsed, options);
}

#[test]
fn options_json_rejects_invalid_values() {
    let err = MiniAreaChartOptions::from_json_str(r#"{ "width": -5 }"#).expect_err("negative width");
    assert!(matches!(err, ChartError::InvalidSeriesRect { .. }));

    let err = MiniAreaChartOptions::from_json_str(r#"{ "fill": "not-a-color" }"#)
        .expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = MiniAreaChartOptions::from_json_str(r#"{ "marker": { "shape": "star" } }"#)
        .expect_err("bad shape");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn frame_contract_carries_schema_version() {
    let chart = rendered_chart();
    let json = chart.frame_json_contract_v1_pretty().expect("serialize frame");

    let payload: SparklineFrameJsonContractV1 = serde_json::from_str(&json).expect("parse payload");
    assert_eq!(payload.schema_version, SPARKLINE_FRAME_JSON_SCHEMA_V1);
    assert_eq!(payload.frame, chart.frame());
    assert_eq!(payload.frame.markers.len(), 4);
    assert!(
        payload
            .frame
            .markers
            .iter()
            .all(|marker| marker.shape == MarkerShape::Diamond)
    );
}

#[test]
fn frame_parser_accepts_bare_and_versioned_payloads() {
    let frame = rendered_chart().frame();
    let versioned = frame.to_json_contract_v1_pretty().expect("serialize contract");
    let bare = serde_json::to_string(&frame).expect("serialize bare frame");

    assert_eq!(
        SparklineFrame::from_json_compat_str(&versioned).expect("versioned"),
        frame
    );
    assert_eq!(SparklineFrame::from_json_compat_str(&bare).expect("bare"), frame);
}

#[test]
fn frame_parser_rejects_unknown_schema_version() {
    let frame = rendered_chart().frame();
    let payload = serde_json::json!({ "schema_version": 2, "frame": frame });

    let err = SparklineFrame::from_json_compat_str(&payload.to_string()).expect_err("v2 payload");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("schema version")));
}
