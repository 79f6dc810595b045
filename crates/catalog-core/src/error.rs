//! Error types and exit codes for catalog
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, malformed data files)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (catalog file missing, product not found)
//!
//! Scoring and filtering never produce these errors. They degrade to
//! `None` or an empty selection instead; see [`crate::score`] and
//! [`crate::query`].

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing catalog, unknown product (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading data or serving CLI requests
#[derive(Error, Debug)]
pub enum CatalogError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("catalog not found at {path:?}")]
    CatalogNotFound { path: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CatalogError {
    /// Create an error for a failed IO or parse operation on a file
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CatalogError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CatalogError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CatalogError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CatalogError::UnknownFormat(_)
            | CatalogError::UsageError(_)
            | CatalogError::InvalidValue { .. } => ExitCode::Usage,

            CatalogError::CatalogNotFound { .. } | CatalogError::NotFound { .. } => {
                ExitCode::Data
            }

            CatalogError::Io(_)
            | CatalogError::Json(_)
            | CatalogError::Toml(_)
            | CatalogError::FailedOperationWithTarget { .. }
            | CatalogError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CatalogError::UnknownFormat(_) => "unknown_format",
            CatalogError::UsageError(_) => "usage_error",
            CatalogError::InvalidValue { .. } => "invalid_value",
            CatalogError::CatalogNotFound { .. } => "catalog_not_found",
            CatalogError::NotFound { .. } => "not_found",
            CatalogError::Io(_) => "io_error",
            CatalogError::Json(_) => "json_error",
            CatalogError::Toml(_) => "toml_error",
            CatalogError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CatalogError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
