// Central Error Type for the Data-Access Layer

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status an outer layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) | AppError::Domain(_) | AppError::Serialization(_) => 400,
            AppError::Token(_) => 401,
            AppError::NotFound(_) => 404,
            AppError::Database(_) | AppError::Config(_) => 500,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.status_code() == 400
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in the infra-sqlite crate
// by mapping into AppError::Database / AppError::BadRequest

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::BadRequest("No data".into()).status_code(), 400);
        assert_eq!(AppError::NotFound("No company: nope".into()).status_code(), 404);
        assert_eq!(AppError::Token("bad signature".into()).status_code(), 401);
        assert_eq!(AppError::Database("locked".into()).status_code(), 500);
    }

    #[test]
    fn test_domain_errors_are_bad_requests() {
        let err: AppError = DomainError::ValidationError("empty title".into()).into();
        assert!(err.is_bad_request());
        assert!(!err.is_not_found());
    }
}
