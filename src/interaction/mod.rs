use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{NodeDatum, Point};

/// Pointer and highlight state owned by one chart.
///
/// The highlight is a coordinate key compared against node points, never a
/// reference into host data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    cursor: Option<Point>,
    highlighted: Option<Point>,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn highlighted(self) -> Option<Point> {
        self.highlighted
    }

    #[must_use]
    pub fn is_highlighted(self, point: Point) -> bool {
        self.highlighted == Some(point)
    }

    /// Returns `true` when the key changed.
    pub fn set_highlighted(&mut self, key: Option<Point>) -> bool {
        let changed = self.highlighted != key;
        self.highlighted = key;
        changed
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point::new(x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
    }
}

/// Index of the node closest to `local` by horizontal distance.
///
/// Ties resolve to the later index so the rightmost of stacked points wins.
#[must_use]
pub fn pick_closest_index(node_data: &[NodeDatum], local: Point) -> Option<usize> {
    node_data
        .iter()
        .enumerate()
        .filter(|(_, datum)| datum.point.x.is_finite())
        .min_by_key(|(index, datum)| {
            (
                OrderedFloat((datum.point.x - local.x).abs()),
                std::cmp::Reverse(*index),
            )
        })
        .map(|(index, _)| index)
}
