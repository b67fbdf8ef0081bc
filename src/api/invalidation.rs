use serde::{Deserialize, Serialize};

use crate::render::Renderer;

use super::MiniAreaChart;

/// Pending work recorded by setters, ordered by cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Marker visuals only; geometry is still current.
    Markers,
    /// Scales, node data, paths and markers.
    Layout,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

impl<R: Renderer> MiniAreaChart<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.invalidation
    }

    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.invalidation != InvalidationLevel::None
    }

    /// Records pending work; levels only ever escalate until the next flush.
    pub fn invalidate(&mut self, level: InvalidationLevel) {
        self.invalidation = self.invalidation.max(level);
    }

    /// Runs the cheapest pass covering all pending work and returns what ran.
    ///
    /// Intended to be called once per frame after a batch of mutations.
    pub fn flush(&mut self) -> InvalidationLevel {
        let level = self.invalidation;
        match level {
            InvalidationLevel::None => {}
            InvalidationLevel::Markers => self.update_markers(),
            InvalidationLevel::Layout => self.update(),
        }
        level
    }
}
