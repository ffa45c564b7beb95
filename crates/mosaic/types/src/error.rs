//! The engine-wide error taxonomy.
//!
//! Every failure path in the engine maps onto one of four conditions the
//! caller can branch on. `Validation` and `ContentUnavailable` are reported
//! immediately with nothing persisted; `DataIncomplete` is recoverable where
//! a degraded computation is possible; `ConcurrencyConflict` is retried once
//! internally before it surfaces.

use thiserror::Error;

/// Typed failure conditions reported by every engine operation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed or incomplete input: wrong response count, out-of-range
    /// age, unknown assessment or session, response for the wrong item.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The content store cannot supply a required item, cutoff band or
    /// archetype.
    #[error("content unavailable: {0}")]
    ContentUnavailable(String),

    /// Insufficient profile history to compute a dependent metric.
    #[error("insufficient data: {0}")]
    DataIncomplete(String),

    /// A versioned profile write lost the race against a concurrent update.
    #[error("concurrency conflict: expected version {expected}, found {found}")]
    ConcurrencyConflict { expected: u64, found: u64 },
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
