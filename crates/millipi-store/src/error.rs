//! Error types for the growth history stores.
//!
//! All errors are propagated via [`StoreError`], which wraps the underlying
//! [`sqlx`] errors with additional context about which operation failed. A
//! store failure during a growth attempt must leave the growth counter
//! unchanged; the coordinator relies on these errors surfacing rather than
//! being swallowed.

use millipi_types::GrowthCount;

/// Errors that can occur in the store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The history already contains a record for this growth count.
    #[error("history already contains growth count {0}")]
    DuplicateCount(GrowthCount),

    /// A persisted record could not be decoded.
    #[error("invalid stored record: {0}")]
    InvalidRecord(String),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
