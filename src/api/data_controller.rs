use tracing::debug;

use crate::core::{SeriesDatum, SeriesKey, canonical_y};
use crate::render::Renderer;

use super::{InvalidationLevel, MiniAreaChart};

impl<R: Renderer> MiniAreaChart<R> {
    /// Replaces the series with plain values; x keys are the numeric indices.
    pub fn set_data(&mut self, values: Vec<Option<f64>>) {
        let x_data = (0..values.len()).map(|i| SeriesKey::number(i as f64)).collect();
        self.replace_data(x_data, values);
    }

    /// Replaces the series with explicit `(x, y)` pairs.
    pub fn set_xy_data(&mut self, pairs: Vec<(SeriesKey, Option<f64>)>) {
        let (x_data, y_data): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        self.replace_data(x_data, y_data);
    }

    /// Replaces the series with prepared datums.
    pub fn set_series_data(&mut self, data: Vec<SeriesDatum>) {
        let (x_data, y_data): (Vec<_>, Vec<_>) = data
            .into_iter()
            .map(|datum| (datum.x, datum.y))
            .unzip();
        self.replace_data(x_data, y_data);
    }

    /// Drops all samples. The next update keeps the previously built geometry.
    pub fn clear_data(&mut self) {
        self.replace_data(Vec::new(), Vec::new());
    }

    /// Current samples as datums, index-aligned with `x_data`/`y_data`.
    #[must_use]
    pub fn series_data(&self) -> Vec<SeriesDatum> {
        self.x_data
            .iter()
            .zip(&self.y_data)
            .map(|(x, y)| SeriesDatum { x: x.clone(), y: *y })
            .collect()
    }

    fn replace_data(&mut self, x_data: Vec<SeriesKey>, y_data: Vec<Option<f64>>) {
        let original_count = y_data.len();
        let y_data: Vec<Option<f64>> = y_data
            .into_iter()
            .map(|value| value.and_then(canonical_y))
            .collect();
        let missing_count = y_data.iter().filter(|value| value.is_none()).count();
        debug!(original_count, missing_count, "set sparkline data");

        self.x_data = x_data;
        self.y_data = y_data;
        self.invalidate(InvalidationLevel::Layout);
    }
}
