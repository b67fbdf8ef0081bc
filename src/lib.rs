//! sparkline-rs: a mini area chart (sparkline) engine.
//!
//! Data goes in as `(x, y)` samples; each update produces deterministic
//! series-local geometry (fill polygon, stroke polyline, zero line and point
//! markers) that any [`render::Renderer`] can draw.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{MiniAreaChart, MiniAreaChartOptions};
pub use error::{ChartError, ChartResult};
