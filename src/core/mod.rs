pub mod band_scale;
pub mod domain;
pub mod primitives;
pub mod scale;
pub mod types;

pub use band_scale::BandScale;
pub use domain::{find_min_and_max, resolve_y_domain};
pub use primitives::{canonical_y, decimal_to_f64};
pub use scale::LinearScale;
pub use types::{AreaPathDatum, NodeDatum, Point, SeriesDatum, SeriesKey, SeriesRect};
