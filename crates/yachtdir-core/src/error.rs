use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read directory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse directory file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("directory validation failed: {0}")]
    Validation(String),
}

/// A coordinate pair that cannot be used for distance math.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("distance computation produced a non-finite result")]
    NonFiniteDistance,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tier '{0}'; expected free, tier1, tier2, or tier3")]
pub struct UnknownTier(pub String);
