use crate::error::ChartResult;
use crate::render::{Color, Renderer};

use super::options::{validate_size, validate_stroke};
use super::{AxisStyle, InvalidationLevel, LineStyle, MiniAreaChart, Padding};

impl<R: Renderer> MiniAreaChart<R> {
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> ChartResult<()> {
        validate_size(width, height)?;
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.invalidate(InvalidationLevel::Layout);
        }
        Ok(())
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) -> ChartResult<()> {
        let padding = padding.validate()?;
        if self.padding != padding {
            self.padding = padding;
            self.invalidate(InvalidationLevel::Layout);
        }
        Ok(())
    }

    #[must_use]
    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Color) -> ChartResult<()> {
        fill.validate()?;
        if self.fill != fill {
            self.fill = fill;
            self.invalidate(InvalidationLevel::Layout);
        }
        Ok(())
    }

    #[must_use]
    pub fn line(&self) -> LineStyle {
        self.line
    }

    pub fn set_line(&mut self, line: LineStyle) -> ChartResult<()> {
        validate_stroke(line.stroke, line.stroke_width, "line")?;
        if self.line != line {
            self.line = line;
            self.invalidate(InvalidationLevel::Layout);
        }
        Ok(())
    }

    #[must_use]
    pub fn axis(&self) -> AxisStyle {
        self.axis
    }

    pub fn set_axis(&mut self, axis: AxisStyle) -> ChartResult<()> {
        validate_stroke(axis.stroke, axis.stroke_width, "axis")?;
        if self.axis != axis {
            self.axis = axis;
            self.invalidate(InvalidationLevel::Layout);
        }
        Ok(())
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title is only used by tooltips, so no geometry is invalidated.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    #[must_use]
    pub fn tooltip_enabled(&self) -> bool {
        self.tooltip.enabled
    }

    pub fn set_tooltip_enabled(&mut self, enabled: bool) {
        self.tooltip.enabled = enabled;
    }
}
