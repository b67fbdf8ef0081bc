use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid series rect: width={width}, height={height}")]
    InvalidSeriesRect { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown marker shape: `{0}`")]
    UnknownMarkerShape(String),

    #[error("invalid color: `{0}`")]
    InvalidColor(String),
}
