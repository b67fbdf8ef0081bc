use serde::{Deserialize, Serialize};

use crate::core::{AreaPathDatum, BandScale, LinearScale, NodeDatum, Point, SeriesDatum, SeriesKey};

/// Output of one node-data pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDataSet {
    /// One entry per input index.
    pub node_data: Vec<NodeDatum>,
    /// Node points followed by baseline vertices under the last and first point.
    pub area_data: Vec<AreaPathDatum>,
}

/// Projects samples into pixel space.
///
/// Returns `None` when there are no samples. Missing values are placed at
/// the zero line but keep `y == None` in their datum. Points sit in the
/// middle of their band.
#[must_use]
pub fn generate_node_data(
    x_data: &[SeriesKey],
    y_data: &[Option<f64>],
    x_scale: &BandScale<SeriesKey>,
    y_scale: LinearScale,
) -> Option<NodeDataSet> {
    if y_data.is_empty() || x_data.is_empty() {
        return None;
    }

    let offset_x = x_scale.bandwidth() / 2.0;
    let range_start = x_scale.range().0;
    let to_x = |key: &SeriesKey| x_scale.convert(key).unwrap_or(range_start) + offset_x;

    let mut node_data = Vec::with_capacity(y_data.len());
    let mut area_data = Vec::with_capacity(y_data.len() + 2);

    for (x_datum, &y_datum) in x_data.iter().zip(y_data) {
        let point = Point::new(to_x(x_datum), y_scale.convert(y_datum.unwrap_or(0.0)));
        let series_datum = SeriesDatum {
            x: x_datum.clone(),
            y: y_datum,
        };

        area_data.push(AreaPathDatum {
            series_datum: Some(series_datum.clone()),
            point,
        });
        node_data.push(NodeDatum {
            series_datum,
            point,
        });
    }

    let y_zero = y_scale.convert(0.0);
    let first_x = node_data.first().map_or(range_start, |datum| datum.point.x);
    let last_x = node_data.last().map_or(range_start, |datum| datum.point.x);
    area_data.push(AreaPathDatum {
        series_datum: None,
        point: Point::new(last_x, y_zero),
    });
    area_data.push(AreaPathDatum {
        series_datum: None,
        point: Point::new(first_x, y_zero),
    });

    Some(NodeDataSet {
        node_data,
        area_data,
    })
}
