use crate::core::{AreaPathDatum, NodeDatum};
use crate::render::{Color, LineCap, LineJoin, PathShape, Renderer};

use super::{LineStyle, MiniAreaChart};

/// Fewer samples than this draw neither stroke nor fill.
pub const MIN_PATH_SAMPLES: usize = 2;

/// Rebuilds the open polyline through every node, missing values included.
///
/// `sample_count` is the length of the y data; below two the path stays empty.
pub fn build_stroke_path(
    shape: &mut PathShape,
    node_data: &[NodeDatum],
    sample_count: usize,
    line: LineStyle,
) {
    shape.path.clear();
    if sample_count < MIN_PATH_SAMPLES {
        return;
    }

    for (i, datum) in node_data.iter().enumerate() {
        if i > 0 {
            shape.path.line_to(datum.point.x, datum.point.y);
        } else {
            shape.path.move_to(datum.point.x, datum.point.y);
        }
    }

    shape.line_join = LineJoin::Round;
    shape.line_cap = LineCap::Round;
    shape.fill = None;
    shape.stroke = Some(line.stroke);
    shape.stroke_width = line.stroke_width;
}

/// Rebuilds the closed fill polygon over all area vertices.
///
/// The guard uses the y-data length, since area data always carries two extra
/// baseline vertices.
pub fn build_fill_path(
    shape: &mut PathShape,
    area_data: &[AreaPathDatum],
    sample_count: usize,
    fill: Color,
) {
    shape.path.clear();
    if sample_count < MIN_PATH_SAMPLES {
        return;
    }

    for (i, datum) in area_data.iter().enumerate() {
        if i > 0 {
            shape.path.line_to(datum.point.x, datum.point.y);
        } else {
            shape.path.move_to(datum.point.x, datum.point.y);
        }
    }
    shape.path.close_path();

    shape.line_join = LineJoin::Round;
    shape.stroke = None;
    shape.fill = Some(fill);
}

impl<R: Renderer> MiniAreaChart<R> {
    pub(super) fn update_stroke(&mut self) {
        build_stroke_path(
            &mut self.stroke_path,
            &self.node_data,
            self.y_data.len(),
            self.line,
        );
    }

    pub(super) fn update_fill(&mut self) {
        build_fill_path(
            &mut self.fill_path,
            &self.area_data,
            self.y_data.len(),
            self.fill,
        );
    }
}
