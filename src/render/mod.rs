mod frame;
mod marker;
mod null_renderer;
mod path;
mod primitives;

pub use frame::SparklineFrame;
pub use marker::{MarkerPrimitive, MarkerShape};
pub use null_renderer::NullRenderer;
pub use path::{Path, PathCommand, PathShape};
pub use primitives::{Color, LineCap, LineJoin, LinePrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `SparklineFrame`, so drawing code
/// stays isolated from scale, marker and highlight logic.
pub trait Renderer {
    fn render(&mut self, frame: &SparklineFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
