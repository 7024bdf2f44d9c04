use serde_json::{json, Value};
use thiserror::Error;

/// Engine-level error type.
/// Every variant renders into the `{"error": {"code", "message"}}` envelope
/// written back on the request channel.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid limit: {0} (must be zero or greater)")]
    InvalidLimit(i64),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for the envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidLimit(_) => "INVALID_LIMIT",
            AppError::Catalog(_) => "CATALOG_ERROR",
            AppError::Json(_) => "BAD_REQUEST",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Renders the error envelope. Internal-class failures are logged and
    /// their details withheld from the caller.
    pub fn to_envelope(&self) -> Value {
        let message = match self {
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                "An I/O error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        })
    }
}
