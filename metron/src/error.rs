use thiserror::Error;

/// Errors raised by unit conversions and widget state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A conversion needed DPI or em-size but the device metrics are not available yet.
    #[error("device metrics unavailable")]
    MetricsUnavailable,
    #[error("unknown units: `{0}`")]
    UnknownUnits(String),
    #[error("button is not tri-state checkable")]
    NotTriStateCheckable,
}

pub type Result<T> = std::result::Result<T, Error>;
