//! Error types for growth attempts.
//!
//! Every variant leaves the growth counter and the published expansion
//! unchanged: a failed attempt has no partial effects, so the caller may
//! safely retry the whole `grow()` call. The coordinator never retries on
//! its own.

use millipi_digits::GeneratorError;
use millipi_store::StoreError;

/// Errors that can occur during a growth attempt.
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// Digit generation failed (e.g. the requested precision exceeds the
    /// configured ceiling).
    #[error("digit generation failed: {0}")]
    Generation(#[from] GeneratorError),

    /// The history record could not be persisted.
    #[error("history persistence failed: {0}")]
    Persistence(#[from] StoreError),

    /// The blocking digit-generation task did not complete.
    #[error("digit generation task aborted: {0}")]
    Aborted(String),

    /// The growth counter would overflow `u64::MAX`.
    #[error("growth counter overflow: cannot advance beyond u64::MAX")]
    CounterOverflow,
}
