use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Categorical scale splitting a pixel range into equal bands.
///
/// The domain keeps distinct keys in first-seen order; repeated keys share a band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K: Hash + Eq> {
    domain: IndexSet<K>,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    step: f64,
    start: f64,
    bandwidth: f64,
}

impl<K: Hash + Eq> Default for BandScale<K> {
    fn default() -> Self {
        let mut scale = Self {
            domain: IndexSet::new(),
            range_start: 0.0,
            range_end: 1.0,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            step: 0.0,
            start: 0.0,
            bandwidth: 0.0,
        };
        scale.rescale();
        scale
    }
}

impl<K: Hash + Eq + Clone> BandScale<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_domain<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        self.domain = keys.into_iter().cloned().collect();
        self.rescale();
    }

    pub fn set_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        self.range_start = start;
        self.range_end = end;
        self.rescale();
        Ok(())
    }

    /// Sets inner/outer padding as fractions of the step. Inner padding must be in `[0, 1]`.
    pub fn set_padding(&mut self, inner: f64, outer: f64) -> ChartResult<()> {
        if !inner.is_finite() || !(0.0..=1.0).contains(&inner) {
            return Err(ChartError::InvalidData(
                "band padding inner must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !outer.is_finite() || outer < 0.0 {
            return Err(ChartError::InvalidData(
                "band padding outer must be finite and >= 0".to_owned(),
            ));
        }
        self.padding_inner = inner;
        self.padding_outer = outer;
        self.rescale();
        Ok(())
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<K> {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Pixel start of the band for `key`, or `None` when the key is not in the domain.
    #[must_use]
    pub fn convert(&self, key: &K) -> Option<f64> {
        self.domain
            .get_index_of(key)
            .map(|index| self.start + self.step * index as f64)
    }
}

impl<K: Hash + Eq> BandScale<K> {
    fn rescale(&mut self) {
        let count = self.domain.len() as f64;
        let span = self.range_end - self.range_start;
        self.step = span / (count - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        self.start =
            self.range_start + (span - self.step * (count - self.padding_inner)) * self.align;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }
}
