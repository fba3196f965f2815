use thiserror::Error;
use yachtdir_core::CoordinateError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("invalid search origin: {0}")]
    InvalidOrigin(#[source] CoordinateError),

    #[error("search radius must be a non-negative finite number, got {0}")]
    InvalidRadius(f64),
}
