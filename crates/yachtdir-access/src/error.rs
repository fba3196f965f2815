use thiserror::Error;

/// A spreadsheet cell that could not be turned into a profile value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    #[error("{field}: value must be a number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("{field}: value must be at least {min}")]
    BelowMinimum { field: String, min: f64 },

    #[error("{field}: value must be at most {max}")]
    AboveMaximum { field: String, max: f64 },

    #[error("{field}: maximum length is {max} characters (current: {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("{field}: invalid email format")]
    InvalidEmail { field: String },

    #[error("{field}: invalid URL format")]
    InvalidUrl { field: String },

    #[error("{field}: expected yes/no, got '{value}'")]
    InvalidBoolean { field: String, value: String },

    #[error("{field}: expected a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { field: String, value: String },

    #[error("{field}: invalid JSON: {reason}")]
    InvalidJson { field: String, reason: String },

    #[error("{field}: required value is missing")]
    MissingRequired { field: String },

    #[error("{field}: column cannot be imported")]
    NotImportable { field: String },
}
