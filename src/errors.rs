//! Structured error types for the simulator
//!
//! Input problems are rejected before any simulation runs, with machine
//! readable codes so the surfaces can style them consistently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured error payload for the rendering surfaces
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

/// Simulator error types with proper categorization
#[derive(Debug)]
pub enum SimError {
    /// A supplied parameter failed validation; nothing was simulated
    InvalidInput { field: String, reason: String },

    /// Generic wrapper for unexpected failures in the numeric routines
    Internal(anyhow::Error),
}

impl SimError {
    /// Get error code for client identification
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get detailed error message
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { field, reason } => {
                format!("Invalid input for field '{field}': {reason}")
            }
            Self::Internal(err) => format!("Internal error: {err}"),
        }
    }

    /// Convert to a structured report for rendering
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.message(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SimError {}

impl From<anyhow::Error> for SimError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// Helper trait to convert validation errors
pub trait ValidationErrorExt<T> {
    fn map_validation_err(self, field: &str) -> Result<T>;
}

impl<T> ValidationErrorExt<T> for anyhow::Result<T> {
    fn map_validation_err(self, field: &str) -> Result<T> {
        self.map_err(|e| SimError::InvalidInput {
            field: field.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Type alias for Results using SimError
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_error_codes() {
        let err = SimError::InvalidInput {
            field: "sample_size_a".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.code(), "INVALID_INPUT");
        assert_eq!(SimError::Internal(anyhow!("boom")).code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_report() {
        let err = SimError::InvalidInput {
            field: "true_rate_b".to_string(),
            reason: "must lie in [0, 1]".to_string(),
        };
        let report = err.to_report();

        assert_eq!(report.code, "INVALID_INPUT");
        assert!(report.message.contains("true_rate_b"));
    }

    #[test]
    fn test_map_validation_err() {
        let res: anyhow::Result<()> = Err(anyhow!("out of range"));
        let mapped = res.map_validation_err("seed");

        match mapped {
            Err(SimError::InvalidInput { field, reason }) => {
                assert_eq!(field, "seed");
                assert!(reason.contains("out of range"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
