//! Error types for the travel planner service
//!
//! The planning core itself never fails; these errors belong to the
//! outer layers (configuration, candidate search, request validation).

use thiserror::Error;

/// Result type alias for fallible planner-service operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Error, Debug)]
pub enum PlannerError {

    // =============================
    // Request / Boundary Errors
    // =============================

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    // =============================
    // Collaborator Errors
    // =============================

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Date parse error: {0}")]
    DateError(#[from] chrono::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PlannerError {
    /// True for errors caused by the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidRequest(_)
                | PlannerError::MissingField(_)
                | PlannerError::DateError(_)
                | PlannerError::SerializationError(_)
        )
    }
}
