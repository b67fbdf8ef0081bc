use serde::{Deserialize, Serialize};

use crate::core::SeriesRect;
use crate::error::{ChartError, ChartResult};
use crate::extensions::{HighlightStyle, MarkerStyle};
use crate::render::Color;

/// Space between the chart bounds and the series rect, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(3.0)
    }
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub(super) fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.top, "top"),
            (self.right, "right"),
            (self.bottom, "bottom"),
            (self.left, "left"),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "padding `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }
}

/// Stroke of the series line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgba8(124, 181, 236, 1.0),
            stroke_width: 1.0,
        }
    }
}

/// Stroke of the zero axis line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgba8(204, 214, 235, 1.0),
            stroke_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    pub enabled: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Serializable configuration of a mini area chart.
///
/// Callbacks (marker formatter, tooltip renderer) are installed separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniAreaChartOptions {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub fill: Color,
    pub line: LineStyle,
    pub axis: AxisStyle,
    pub marker: MarkerStyle,
    pub highlight_style: HighlightStyle,
    pub title: Option<String>,
    pub tooltip: TooltipOptions,
}

impl Default for MiniAreaChartOptions {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            padding: Padding::default(),
            fill: Color::rgba8(124, 181, 236, 0.25),
            line: LineStyle::default(),
            axis: AxisStyle::default(),
            marker: MarkerStyle::default(),
            highlight_style: HighlightStyle::default(),
            title: None,
            tooltip: TooltipOptions::default(),
        }
    }
}

impl MiniAreaChartOptions {
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart options: {e}")))?;
        options.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart options: {e}"))
        })
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_size(self.width, self.height)?;
        self.padding.validate()?;
        self.fill.validate()?;
        validate_stroke(self.line.stroke, self.line.stroke_width, "line")?;
        validate_stroke(self.axis.stroke, self.axis.stroke_width, "axis")?;
        validate_marker_style(&self.marker)?;
        validate_highlight_style(&self.highlight_style)?;
        Ok(self)
    }

    /// Series rect derived from size and padding; extents never go negative.
    #[must_use]
    pub fn series_rect(&self) -> SeriesRect {
        series_rect_for(self.width, self.height, self.padding)
    }
}

pub(super) fn series_rect_for(width: f64, height: f64, padding: Padding) -> SeriesRect {
    SeriesRect::new(
        padding.left,
        padding.top,
        (width - padding.left - padding.right).max(0.0),
        (height - padding.top - padding.bottom).max(0.0),
    )
}

pub(super) fn validate_size(width: f64, height: f64) -> ChartResult<()> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(ChartError::InvalidSeriesRect { width, height });
    }
    Ok(())
}

pub(super) fn validate_stroke(stroke: Color, width: f64, name: &str) -> ChartResult<()> {
    stroke.validate()?;
    validate_width(width, name)
}

pub(super) fn validate_width(width: f64, name: &str) -> ChartResult<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} stroke width must be finite and >= 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_marker_style(style: &MarkerStyle) -> ChartResult<()> {
    if !style.size.is_finite() {
        return Err(ChartError::InvalidData(
            "marker size must be finite".to_owned(),
        ));
    }
    validate_width(style.stroke_width, "marker")?;
    for color in style.fill.iter().chain(style.stroke.iter()) {
        color.validate()?;
    }
    Ok(())
}

pub(super) fn validate_highlight_style(style: &HighlightStyle) -> ChartResult<()> {
    if style.size.is_some_and(|size| !size.is_finite()) {
        return Err(ChartError::InvalidData(
            "highlight size must be finite".to_owned(),
        ));
    }
    if let Some(width) = style.stroke_width {
        validate_width(width, "highlight")?;
    }
    for color in style.fill.iter().chain(style.stroke.iter()) {
        color.validate()?;
    }
    Ok(())
}
