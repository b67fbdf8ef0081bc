use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{canonical_y, decimal_to_f64};
use crate::error::ChartResult;

/// Rectangle the series is drawn into, in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SeriesRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Position in series-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// X value of a datum.
///
/// Numeric keys are continuous for tooltip purposes, categories and times are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SeriesKey {
    Number(OrderedFloat<f64>),
    Category(String),
    Time(DateTime<Utc>),
}

impl SeriesKey {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn category(value: impl Into<String>) -> Self {
        Self::Category(value.into())
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<f64> for SeriesKey {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for SeriesKey {
    fn from(value: &str) -> Self {
        Self::category(value)
    }
}

impl From<String> for SeriesKey {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

impl From<DateTime<Utc>> for SeriesKey {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

/// Semantic value of one input sample. `y == None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDatum {
    pub x: SeriesKey,
    pub y: Option<f64>,
}

impl SeriesDatum {
    /// Builds a datum, turning non-finite `y` into a missing value.
    #[must_use]
    pub fn new(x: impl Into<SeriesKey>, y: Option<f64>) -> Self {
        Self {
            x: x.into(),
            y: y.and_then(canonical_y),
        }
    }

    #[must_use]
    pub fn missing(x: impl Into<SeriesKey>) -> Self {
        Self {
            x: x.into(),
            y: None,
        }
    }

    pub fn from_decimal(x: impl Into<SeriesKey>, y: Decimal) -> ChartResult<Self> {
        Ok(Self::new(x, Some(decimal_to_f64(y, "y")?)))
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.y.is_none()
    }
}

/// One datum paired with its pixel position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDatum {
    pub series_datum: SeriesDatum,
    pub point: Point,
}

/// Vertex of the fill polygon. Baseline vertices carry no datum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPathDatum {
    pub series_datum: Option<SeriesDatum>,
    pub point: Point,
}

impl AreaPathDatum {
    #[must_use]
    pub fn is_baseline(&self) -> bool {
        self.series_datum.is_none()
    }
}
