use thiserror::Error;

use crate::validator::ValidationError;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid schedule: {}", describe(.0))]
    InvalidSchedule(Vec<ValidationError>),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type HoursResult<T> = Result<T, HoursError>;

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
