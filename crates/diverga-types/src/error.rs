//! Error types for the Diverga service.

use thiserror::Error;

/// Unified error type for shared Diverga operations.
#[derive(Debug, Error)]
pub enum DivergaError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
