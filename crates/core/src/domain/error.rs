// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid range: {min_field} ({min}) is greater than {max_field} ({max})")]
    InvalidRange {
        min_field: &'static str,
        min: i64,
        max_field: &'static str,
        max: i64,
    },
}

pub type Result<T> = std::result::Result<T, DomainError>;
