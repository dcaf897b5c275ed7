//! Search error types.

use thiserror::Error;

/// Errors raised while configuring a searcher.
///
/// Searching itself never fails; unusable queries produce empty results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Threshold outside 0.0-1.0
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(f64),

    /// Field weight that is negative, NaN, or all weights zero
    #[error("Invalid field weights: {0}")]
    InvalidWeights(String),

    /// Limit settings that cannot be satisfied
    #[error("Invalid limits: {0}")]
    InvalidLimits(String),
}
