use crate::error::ChartResult;
use crate::render::{Renderer, SparklineFrame};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_command_count: usize,
    pub last_marker_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SparklineFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_command_count =
            frame.fill.path.commands().len() + frame.stroke.path.commands().len();
        self.last_marker_count = frame.markers.len();
        Ok(())
    }
}
