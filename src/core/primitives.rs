use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Maps a raw sample to the semantic value stored in a datum.
///
/// `NaN` and infinities are not representable values, they become missing.
#[must_use]
pub fn canonical_y(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
