use crate::core::{NodeDatum, Point};
use crate::interaction::pick_closest_index;
use crate::render::Renderer;

use super::MiniAreaChart;

impl<R: Renderer> MiniAreaChart<R> {
    /// Highlights the marker sitting at `datum.point`.
    pub fn highlight_datum(&mut self, datum: &NodeDatum) {
        self.highlight_point(datum.point);
    }

    /// Highlights whichever marker sits exactly at `point` (series-local pixels).
    ///
    /// Markers are refreshed immediately.
    pub fn highlight_point(&mut self, point: Point) {
        self.interaction.set_highlighted(Some(point));
        self.update_markers();
    }

    pub fn dehighlight_datum(&mut self) {
        self.interaction.set_highlighted(None);
        self.update_markers();
    }

    #[must_use]
    pub fn highlighted_point(&self) -> Option<Point> {
        self.interaction.highlighted()
    }

    /// Node datum currently matching the highlight key, if any.
    #[must_use]
    pub fn highlighted_datum(&self) -> Option<&NodeDatum> {
        let key = self.interaction.highlighted()?;
        self.node_data.iter().find(|datum| datum.point == key)
    }

    /// Closest node to a pointer given in chart coordinates.
    #[must_use]
    pub fn pick_closest_datum(&self, x: f64, y: f64) -> Option<&NodeDatum> {
        let rect = self.series_rect();
        let local = Point::new(x - rect.x, y - rect.y);
        pick_closest_index(&self.node_data, local).map(|index| &self.node_data[index])
    }

    /// Tracks the pointer and highlights the closest node when it changes.
    ///
    /// Returns the index of the highlighted node.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        self.interaction.on_pointer_move(x, y);
        let rect = self.series_rect();
        let index = pick_closest_index(&self.node_data, Point::new(x - rect.x, y - rect.y))?;
        let point = self.node_data[index].point;
        if !self.interaction.is_highlighted(point) {
            self.highlight_point(point);
        }
        Some(index)
    }

    pub fn on_pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
        if self.interaction.highlighted().is_some() {
            self.dehighlight_datum();
        }
    }
}
