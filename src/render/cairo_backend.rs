use cairo::{Context, Format, ImageSurface, LineCap as CairoLineCap, LineJoin as CairoLineJoin};
use std::f64::consts::PI;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LineCap, LineJoin, MarkerPrimitive, MarkerShape, PathCommand, PathShape, Renderer,
    SparklineFrame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub lines_drawn: usize,
    pub markers_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &SparklineFrame,
    ) -> ChartResult<()>;
}

/// Cairo renderer backend.
///
/// Renders offscreen into an image surface through `Renderer::render`, or in
/// place on an external context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(1.0, 1.0, 1.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &SparklineFrame,
    ) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        context.save().map_err(|err| map_backend_error("failed to save state", err))?;
        context.translate(frame.series_rect.x, frame.series_rect.y);

        if draw_path_shape(context, &frame.fill)? {
            stats.paths_drawn += 1;
        }

        if let Some(line) = frame.axis_line {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke axis line", err))?;
            stats.lines_drawn += 1;
        }

        if draw_path_shape(context, &frame.stroke)? {
            stats.paths_drawn += 1;
        }

        for marker in &frame.markers {
            draw_marker(context, *marker)?;
            stats.markers_drawn += 1;
        }

        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &SparklineFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &SparklineFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_path_shape(context: &Context, shape: &PathShape) -> ChartResult<bool> {
    if shape.path.is_empty() {
        return Ok(false);
    }

    context.new_path();
    for command in shape.path.commands() {
        match *command {
            PathCommand::MoveTo { x, y } => context.move_to(x, y),
            PathCommand::LineTo { x, y } => context.line_to(x, y),
            PathCommand::ClosePath => context.close_path(),
        }
    }
    context.set_line_join(match shape.line_join {
        LineJoin::Miter => CairoLineJoin::Miter,
        LineJoin::Round => CairoLineJoin::Round,
        LineJoin::Bevel => CairoLineJoin::Bevel,
    });
    context.set_line_cap(match shape.line_cap {
        LineCap::Butt => CairoLineCap::Butt,
        LineCap::Round => CairoLineCap::Round,
        LineCap::Square => CairoLineCap::Square,
    });

    fill_and_stroke(context, shape.fill, shape.stroke, shape.stroke_width)?;
    Ok(true)
}

fn draw_marker(context: &Context, marker: MarkerPrimitive) -> ChartResult<()> {
    let half = marker.size / 2.0;
    context.new_path();
    match marker.shape {
        MarkerShape::Circle => context.arc(marker.x, marker.y, half, 0.0, 2.0 * PI),
        MarkerShape::Square => context.rectangle(
            marker.x - half,
            marker.y - half,
            marker.size,
            marker.size,
        ),
        MarkerShape::Diamond => {
            context.move_to(marker.x, marker.y - half);
            context.line_to(marker.x + half, marker.y);
            context.line_to(marker.x, marker.y + half);
            context.line_to(marker.x - half, marker.y);
            context.close_path();
        }
    }
    fill_and_stroke(context, marker.fill, marker.stroke, marker.stroke_width)
}

fn fill_and_stroke(
    context: &Context,
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
) -> ChartResult<()> {
    if let Some(fill) = fill {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
    }
    if let Some(stroke) = stroke.filter(|_| stroke_width > 0.0) {
        apply_color(context, stroke);
        context.set_line_width(stroke_width);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
    }
    context.new_path();
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
