use tracing::{trace, warn};

use crate::core::{SeriesRect, resolve_y_domain};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, Renderer, SparklineFrame};

use super::node_data_generator::generate_node_data;
use super::{InvalidationLevel, MiniAreaChart};

impl<R: Renderer> MiniAreaChart<R> {
    /// Rebuilds scales, node data, markers and paths, in that order.
    ///
    /// Without samples the scales and zero line are refreshed but the previous
    /// node data, markers and paths are kept.
    pub fn update(&mut self) {
        let rect = self.series_rect();
        self.invalidation = InvalidationLevel::None;

        self.update_x_scale(rect);
        self.update_y_scale(rect);
        self.update_axis_line();

        let Some(data) = generate_node_data(&self.x_data, &self.y_data, &self.x_scale, self.y_scale)
        else {
            trace!("no sparkline data, keeping previous geometry");
            // A shape change may have emptied the overlay since the last pass.
            if self.markers.len() != self.node_data.len() {
                self.update_marker_selection();
                self.update_markers();
            }
            return;
        };

        self.node_data = data.node_data;
        self.area_data = data.area_data;
        trace!(
            points = self.node_data.len(),
            domain = ?self.y_scale.domain(),
            "sparkline node data generated"
        );

        self.update_marker_selection();
        self.update_markers();

        self.update_stroke();
        self.update_fill();
    }

    /// Scene of the last update, ready for a renderer.
    #[must_use]
    pub fn frame(&self) -> SparklineFrame {
        SparklineFrame {
            series_rect: self.series_rect(),
            fill: self.fill_path.clone(),
            axis_line: Some(self.axis_line),
            stroke: self.stroke_path.clone(),
            markers: self.markers.visible_primitives(),
        }
    }

    /// Flushes pending work, then hands the frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        self.flush();
        let frame = self.frame();
        self.renderer.render(&frame).inspect_err(|err| {
            warn!(error = %err, "renderer rejected sparkline frame");
        })
    }

    fn update_x_scale(&mut self, rect: SeriesRect) {
        if let Err(err) = self.x_scale.set_range(0.0, rect.width) {
            warn!(error = %err, "skipping x range refresh");
        }
        self.x_scale.set_domain(&self.x_data);
    }

    fn update_y_scale(&mut self, rect: SeriesRect) {
        if let Err(err) = self.y_scale.set_range(rect.height, 0.0) {
            warn!(error = %err, "skipping y range refresh");
        }
        let (min_y, max_y) = resolve_y_domain(&self.y_data);
        if let Err(err) = self.y_scale.set_domain(min_y, max_y) {
            warn!(error = %err, "skipping y domain refresh");
        }
    }

    fn update_axis_line(&mut self) {
        let (x1, x2) = self.x_scale.range();
        let y_zero = self.y_scale.convert(0.0);
        self.axis_line = LinePrimitive::new(
            x1,
            y_zero,
            x2,
            y_zero,
            self.axis.stroke_width,
            self.axis.stroke,
        );
    }
}
