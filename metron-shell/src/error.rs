use thiserror::Error;

/// Errors raised while reading metrics configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid value for {var}: `{value}`")]
    InvalidValue { var: &'static str, value: String },
    #[error("{var} must be positive, got {value}")]
    NotPositive { var: &'static str, value: f64 },
}
