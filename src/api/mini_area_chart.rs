use crate::core::{AreaPathDatum, BandScale, LinearScale, NodeDatum, SeriesKey, SeriesRect};
use crate::error::ChartResult;
use crate::extensions::{
    HighlightStyle, MarkerFormatter, MarkerOverlay, MarkerStyle, TooltipRenderer,
};
use crate::interaction::InteractionState;
use crate::render::{Color, LinePrimitive, PathShape, Renderer};

use super::options::series_rect_for;
use super::{AxisStyle, InvalidationLevel, LineStyle, MiniAreaChartOptions, Padding, TooltipOptions};

/// Sparkline drawing a filled area under a line, with optional point markers.
///
/// The host mutates style and data through setters, which only record an
/// [`InvalidationLevel`]. Geometry is rebuilt by [`MiniAreaChart::update`]
/// (or [`MiniAreaChart::flush`]) and handed to the renderer by
/// [`MiniAreaChart::render`].
pub struct MiniAreaChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) width: f64,
    pub(super) height: f64,
    pub(super) padding: Padding,
    pub(super) x_data: Vec<SeriesKey>,
    pub(super) y_data: Vec<Option<f64>>,
    pub(super) x_scale: BandScale<SeriesKey>,
    pub(super) y_scale: LinearScale,
    pub(super) fill: Color,
    pub(super) line: LineStyle,
    pub(super) axis: AxisStyle,
    pub(super) marker: MarkerStyle,
    pub(super) marker_formatter: Option<MarkerFormatter>,
    pub(super) highlight_style: HighlightStyle,
    pub(super) title: Option<String>,
    pub(super) tooltip: TooltipOptions,
    pub(super) tooltip_renderer: Option<TooltipRenderer>,
    pub(super) node_data: Vec<NodeDatum>,
    pub(super) area_data: Vec<AreaPathDatum>,
    pub(super) stroke_path: PathShape,
    pub(super) fill_path: PathShape,
    pub(super) axis_line: LinePrimitive,
    pub(super) markers: MarkerOverlay,
    pub(super) interaction: InteractionState,
    pub(super) invalidation: InvalidationLevel,
}

impl<R: Renderer> std::fmt::Debug for MiniAreaChart<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniAreaChart")
            .field("series_rect", &self.series_rect())
            .field("points", &self.y_data.len())
            .field("markers", &self.markers.len())
            .field("highlighted", &self.interaction.highlighted())
            .field("invalidation", &self.invalidation)
            .field("has_marker_formatter", &self.marker_formatter.is_some())
            .field("has_tooltip_renderer", &self.tooltip_renderer.is_some())
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> MiniAreaChart<R> {
    pub fn new(renderer: R, options: MiniAreaChartOptions) -> ChartResult<Self> {
        let options = options.validate()?;

        Ok(Self {
            renderer,
            width: options.width,
            height: options.height,
            padding: options.padding,
            x_data: Vec::new(),
            y_data: Vec::new(),
            x_scale: BandScale::new(),
            y_scale: LinearScale::default(),
            fill: options.fill,
            line: options.line,
            axis: options.axis,
            marker: options.marker,
            marker_formatter: None,
            highlight_style: options.highlight_style,
            title: options.title,
            tooltip: options.tooltip,
            tooltip_renderer: None,
            node_data: Vec::new(),
            area_data: Vec::new(),
            stroke_path: PathShape::default(),
            fill_path: PathShape::default(),
            axis_line: LinePrimitive::new(
                0.0,
                0.0,
                0.0,
                0.0,
                options.axis.stroke_width,
                options.axis.stroke,
            ),
            markers: MarkerOverlay::new(options.marker.shape),
            interaction: InteractionState::default(),
            invalidation: InvalidationLevel::Layout,
        })
    }

    /// Current configuration, without callbacks.
    #[must_use]
    pub fn options(&self) -> MiniAreaChartOptions {
        MiniAreaChartOptions {
            width: self.width,
            height: self.height,
            padding: self.padding,
            fill: self.fill,
            line: self.line,
            axis: self.axis,
            marker: self.marker,
            highlight_style: self.highlight_style,
            title: self.title.clone(),
            tooltip: self.tooltip,
        }
    }

    /// Replaces the whole configuration. Invalid options leave the chart untouched.
    pub fn apply_options(&mut self, options: MiniAreaChartOptions) -> ChartResult<()> {
        let options = options.validate()?;
        self.set_size(options.width, options.height)?;
        self.set_padding(options.padding)?;
        self.set_fill(options.fill)?;
        self.set_line(options.line)?;
        self.set_axis(options.axis)?;
        self.set_marker_style(options.marker)?;
        self.set_highlight_style(options.highlight_style)?;
        self.title = options.title;
        self.tooltip = options.tooltip;
        Ok(())
    }

    #[must_use]
    pub fn series_rect(&self) -> SeriesRect {
        series_rect_for(self.width, self.height, self.padding)
    }

    #[must_use]
    pub fn x_data(&self) -> &[SeriesKey] {
        &self.x_data
    }

    #[must_use]
    pub fn y_data(&self) -> &[Option<f64>] {
        &self.y_data
    }

    #[must_use]
    pub fn x_scale(&self) -> &BandScale<SeriesKey> {
        &self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    /// Node data of the last update that had data.
    #[must_use]
    pub fn node_data(&self) -> &[NodeDatum] {
        &self.node_data
    }

    /// Fill polygon vertices of the last update that had data (`n + 2` entries).
    #[must_use]
    pub fn area_data(&self) -> &[AreaPathDatum] {
        &self.area_data
    }

    #[must_use]
    pub fn stroke_path(&self) -> &PathShape {
        &self.stroke_path
    }

    #[must_use]
    pub fn fill_path(&self) -> &PathShape {
        &self.fill_path
    }

    #[must_use]
    pub fn axis_line(&self) -> LinePrimitive {
        self.axis_line
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerOverlay {
        &self.markers
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
