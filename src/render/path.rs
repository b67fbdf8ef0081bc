use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineCap, LineJoin};

/// One drawing instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
}

/// Recorded path geometry. Sparklines are short, most paths stay inline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::ClosePath))
    }

    /// Vertices visited by move/line commands, in order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => Some(Point::new(x, y)),
            PathCommand::ClosePath => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.vertices().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if let Some(first) = self.commands.first() {
            if !matches!(first, PathCommand::MoveTo { .. }) {
                return Err(ChartError::InvalidData(
                    "path must start with move_to".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Path plus the paint attributes it is drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub path: Path,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
}

impl Default for PathShape {
    fn default() -> Self {
        Self {
            path: Path::new(),
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            line_join: LineJoin::default(),
            line_cap: LineCap::default(),
        }
    }
}

impl PathShape {
    pub fn validate(&self) -> ChartResult<()> {
        self.path.validate()?;
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and >= 0".to_owned(),
            ));
        }
        for color in self.fill.iter().chain(self.stroke.iter()) {
            color.validate()?;
        }
        Ok(())
    }
}
