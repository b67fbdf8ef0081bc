use std::str::FromStr;

use crate::error::ChartResult;
use crate::extensions::{HighlightStyle, MarkerFormatter, MarkerStyle};
use crate::render::{Color, MarkerShape, Renderer};

use super::options::{validate_highlight_style, validate_marker_style, validate_width};
use super::{InvalidationLevel, MiniAreaChart};

impl<R: Renderer> MiniAreaChart<R> {
    #[must_use]
    pub fn marker_style(&self) -> MarkerStyle {
        self.marker
    }

    /// Replaces the whole marker style; a different shape tears the overlay down.
    pub fn set_marker_style(&mut self, style: MarkerStyle) -> ChartResult<()> {
        validate_marker_style(&style)?;
        if style.shape != self.marker.shape {
            self.set_marker_shape(style.shape);
        }
        if self.marker != style {
            self.marker = style;
            self.invalidate(InvalidationLevel::Markers);
        }
        Ok(())
    }

    pub fn set_marker_enabled(&mut self, enabled: bool) {
        if self.marker.enabled != enabled {
            self.marker.enabled = enabled;
            self.invalidate(InvalidationLevel::Markers);
        }
    }

    pub fn set_marker_size(&mut self, size: f64) -> ChartResult<()> {
        validate_marker_style(&MarkerStyle {
            size,
            ..self.marker
        })?;
        if self.marker.size != size {
            self.marker.size = size;
            self.invalidate(InvalidationLevel::Markers);
        }
        Ok(())
    }

    pub fn set_marker_fill(&mut self, fill: Option<Color>) -> ChartResult<()> {
        if let Some(color) = fill {
            color.validate()?;
        }
        if self.marker.fill != fill {
            self.marker.fill = fill;
            self.invalidate(InvalidationLevel::Markers);
        }
        Ok(())
    }

    pub fn set_marker_stroke(&mut self, stroke: Option<Color>) -> ChartResult<()> {
        if let Some(color) = stroke {
            color.validate()?;
        }
        if self.marker.stroke != stroke {
            self.marker.stroke = stroke;
            self.invalidate(InvalidationLevel::Markers);
        }
        Ok(())
    }

    pub fn set_marker_stroke_width(&mut self, stroke_width: f64) -> ChartResult<()> {
        validate_width(stroke_width, "marker")?;
        if self.marker.stroke_width != stroke_width {
            self.marker.stroke_width = stroke_width;
            self.invalidate(InvalidationLevel::Markers);
        }
        Ok(())
    }

    /// Changes the marker shape.
    ///
    /// Instances cannot change shape in place: every marker is removed now and
    /// recreated, with new ids, by the next update.
    pub fn set_marker_shape(&mut self, shape: MarkerShape) {
        if self.marker.shape == shape && self.markers.shape() == shape {
            return;
        }
        self.marker.shape = shape;
        self.markers.set_shape(shape);
        self.invalidate(InvalidationLevel::Layout);
    }

    /// Changes the marker shape by name (`circle`, `square`, `diamond`).
    pub fn set_marker_shape_name(&mut self, name: &str) -> ChartResult<()> {
        let shape = MarkerShape::from_str(name)?;
        self.set_marker_shape(shape);
        Ok(())
    }

    pub fn set_marker_formatter(&mut self, formatter: Option<MarkerFormatter>) {
        self.marker_formatter = formatter;
        self.invalidate(InvalidationLevel::Markers);
    }

    #[must_use]
    pub fn highlight_style(&self) -> HighlightStyle {
        self.highlight_style
    }

    pub fn set_highlight_style(&mut self, style: HighlightStyle) -> ChartResult<()> {
        validate_highlight_style(&style)?;
        if self.highlight_style != style {
            self.highlight_style = style;
            self.invalidate(InvalidationLevel::Markers);
        }
        Ok(())
    }

    /// Creates markers for new indices and removes markers past the data end.
    pub(super) fn update_marker_selection(&mut self) {
        self.markers.reconcile(&self.node_data);
    }

    /// Re-resolves size, colors, visibility and position of every marker.
    pub fn update_markers(&mut self) {
        self.markers.apply_visuals(
            &self.node_data,
            &self.marker,
            &self.highlight_style,
            self.interaction.highlighted(),
            self.marker_formatter.as_ref(),
        );
        if self.invalidation == InvalidationLevel::Markers {
            self.invalidation = InvalidationLevel::None;
        }
    }
}
