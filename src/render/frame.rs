use serde::{Deserialize, Serialize};

use crate::core::SeriesRect;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, MarkerPrimitive, PathShape};

/// Backend-agnostic scene for one sparkline draw pass.
///
/// Geometry is series-local; renderers translate by `series_rect.x/y`.
/// Draw order is fill, zero axis line, stroke, markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineFrame {
    pub series_rect: SeriesRect,
    pub fill: PathShape,
    pub axis_line: Option<LinePrimitive>,
    pub stroke: PathShape,
    pub markers: Vec<MarkerPrimitive>,
}

impl SparklineFrame {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.series_rect.is_valid() {
            return Err(ChartError::InvalidSeriesRect {
                width: self.series_rect.width,
                height: self.series_rect.height,
            });
        }

        self.fill.validate()?;
        self.stroke.validate()?;
        if let Some(line) = self.axis_line {
            line.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }
}
