use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{NodeDatum, Point, SeriesKey};
use crate::render::{Color, MarkerPrimitive, MarkerShape};

/// Marker configuration shared by every point of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub enabled: bool,
    pub shape: MarkerShape,
    pub size: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            shape: MarkerShape::Circle,
            size: 0.0,
            fill: Some(Color::rgba8(124, 181, 236, 1.0)),
            stroke: Some(Color::rgba8(124, 181, 236, 1.0)),
            stroke_width: 1.0,
        }
    }
}

/// Visual overrides applied to the highlighted marker. `None` keeps the marker value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
    pub size: Option<f64>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            size: Some(6.0),
            fill: Some(Color::rgba8(255, 255, 0, 1.0)),
            stroke: Some(Color::rgba8(192, 192, 192, 1.0)),
            stroke_width: Some(1.0),
        }
    }
}

/// Values handed to a marker formatter, already resolved against the highlight style.
#[derive(Debug, Clone, Copy)]
pub struct MarkerFormatterParams<'a> {
    pub datum: &'a NodeDatum,
    pub x_value: &'a SeriesKey,
    pub y_value: Option<f64>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub size: f64,
    pub highlighted: bool,
}

/// Per-point overrides returned by a formatter. Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerFormat {
    pub enabled: Option<bool>,
    pub shape: Option<MarkerShape>,
    pub size: Option<f64>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
}

/// Caller-supplied per-point marker formatter.
pub type MarkerFormatter = Box<dyn Fn(&MarkerFormatterParams<'_>) -> MarkerFormat>;

/// Process-unique identity of a marker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(u64);

impl MarkerId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Fully resolved look of one marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerVisual {
    pub shape: MarkerShape,
    pub size: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub visible: bool,
    pub highlighted: bool,
}

/// One marker instance of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerNode {
    pub id: MarkerId,
    pub translation: Point,
    pub visual: MarkerVisual,
}

impl MarkerNode {
    #[must_use]
    pub fn to_primitive(&self) -> MarkerPrimitive {
        MarkerPrimitive {
            shape: self.visual.shape,
            x: self.translation.x,
            y: self.translation.y,
            size: self.visual.size.max(0.0),
            fill: self.visual.fill,
            stroke: self.visual.stroke,
            stroke_width: self.visual.stroke_width,
        }
    }
}

/// Indices touched by one overlay reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayDiff {
    pub created: Vec<usize>,
    pub removed: Vec<usize>,
}

impl OverlayDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.removed.is_empty()
    }
}

/// Marker instances keyed by data index.
///
/// Survivors are matched by index only, never by datum value. Every instance
/// carries the overlay shape it was created with.
#[derive(Debug, Default)]
pub struct MarkerOverlay {
    shape: MarkerShape,
    nodes: IndexMap<usize, MarkerNode>,
    next_id: u64,
}

impl MarkerOverlay {
    #[must_use]
    pub fn new(shape: MarkerShape) -> Self {
        Self {
            shape,
            nodes: IndexMap::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn shape(&self) -> MarkerShape {
        self.shape
    }

    /// Switches the instance shape. Existing instances cannot change shape,
    /// so all of them are dropped; returns how many were removed.
    pub fn set_shape(&mut self, shape: MarkerShape) -> usize {
        self.shape = shape;
        let removed = self.nodes.len();
        self.nodes.clear();
        debug!(shape = %shape, removed, "marker overlay torn down");
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MarkerNode> {
        self.nodes.get(&index)
    }

    /// Instances in data-index order.
    pub fn nodes(&self) -> impl Iterator<Item = &MarkerNode> {
        self.nodes.values()
    }

    /// Creates instances for new indices and drops instances past the end.
    pub fn reconcile(&mut self, node_data: &[NodeDatum]) -> OverlayDiff {
        let count = node_data.len();
        let mut diff = OverlayDiff {
            created: Vec::new(),
            removed: self
                .nodes
                .keys()
                .copied()
                .filter(|&index| index >= count)
                .collect(),
        };
        for index in &diff.removed {
            self.nodes.shift_remove(index);
        }

        for (index, datum) in node_data.iter().enumerate() {
            if self.nodes.contains_key(&index) {
                continue;
            }
            let id = MarkerId(self.next_id);
            self.next_id += 1;
            self.nodes.insert(
                index,
                MarkerNode {
                    id,
                    translation: datum.point,
                    visual: MarkerVisual {
                        shape: self.shape,
                        size: 0.0,
                        fill: None,
                        stroke: None,
                        stroke_width: 0.0,
                        visible: false,
                        highlighted: false,
                    },
                },
            );
            diff.created.push(index);
        }
        self.nodes.sort_keys();

        if !diff.is_empty() {
            debug!(
                created = diff.created.len(),
                removed = diff.removed.len(),
                total = self.nodes.len(),
                "marker overlay reconciled"
            );
        }
        diff
    }

    /// Re-resolves every instance against the current style and highlight key.
    pub fn apply_visuals(
        &mut self,
        node_data: &[NodeDatum],
        style: &MarkerStyle,
        highlight: &HighlightStyle,
        highlighted: Option<Point>,
        formatter: Option<&MarkerFormatter>,
    ) {
        let shape = self.shape;
        for (index, node) in &mut self.nodes {
            let Some(datum) = node_data.get(*index) else {
                continue;
            };
            node.visual = resolve_marker_visual(datum, shape, style, highlight, highlighted, formatter);
            node.translation = datum.point;
        }
    }

    /// Draw commands for visible instances, in index order.
    #[must_use]
    pub fn visible_primitives(&self) -> Vec<MarkerPrimitive> {
        self.nodes
            .values()
            .filter(|node| node.visual.visible)
            .map(MarkerNode::to_primitive)
            .collect()
    }
}

/// Resolves the look of the marker for `datum`.
///
/// Highlight overrides apply first, then the formatter. A formatter
/// `enabled` value decides visibility outright; without one the marker is
/// visible when markers are enabled and the resolved size is positive.
#[must_use]
pub fn resolve_marker_visual(
    datum: &NodeDatum,
    shape: MarkerShape,
    style: &MarkerStyle,
    highlight: &HighlightStyle,
    highlighted: Option<Point>,
    formatter: Option<&MarkerFormatter>,
) -> MarkerVisual {
    let is_highlighted = highlighted == Some(datum.point);
    let pick = |over: Option<f64>, base: f64| match over {
        Some(value) if is_highlighted => value,
        _ => base,
    };
    let pick_color = |over: Option<Color>, base: Option<Color>| {
        if is_highlighted && over.is_some() { over } else { base }
    };

    let size = pick(highlight.size, style.size);
    let fill = pick_color(highlight.fill, style.fill);
    let stroke = pick_color(highlight.stroke, style.stroke);
    let stroke_width = pick(highlight.stroke_width, style.stroke_width);

    let format = formatter
        .map(|formatter| {
            formatter(&MarkerFormatterParams {
                datum,
                x_value: &datum.series_datum.x,
                y_value: datum.series_datum.y,
                fill,
                stroke,
                stroke_width,
                size,
                highlighted: is_highlighted,
            })
        })
        .unwrap_or_default();

    let size = format.size.unwrap_or(size);
    let visible = format
        .enabled
        .unwrap_or_else(|| style.enabled && size > 0.0);

    MarkerVisual {
        shape: format.shape.unwrap_or(shape),
        size,
        fill: format.fill.or(fill),
        stroke: format.stroke.or(stroke),
        stroke_width: format.stroke_width.unwrap_or(stroke_width),
        visible,
        highlighted: is_highlighted,
    }
}
