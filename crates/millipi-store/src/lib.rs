//! Durable growth history stores for the Millipi engine.
//!
//! The growth coordinator treats persistence as a collaborator behind the
//! [`GrowthStore`] trait: load the latest record at startup, append exactly
//! one record per successful growth event. Two implementations are provided:
//!
//! - [`PgGrowthStore`] -- `PostgreSQL` via [`sqlx`], the production store.
//!   A `UNIQUE` constraint on the growth count makes the append the
//!   transactional "increment-and-fetch equivalent" the engine needs: two
//!   racing appends for the same count cannot both succeed.
//! - [`MemoryStore`] -- in-process store for tests and embedded use.
//!
//! # Modules
//!
//! - [`memory`] -- In-memory append-only history
//! - [`postgres`] -- `PostgreSQL` connection pool, migrations, and store
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod postgres;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::{PgGrowthStore, PgStoreConfig};

use async_trait::async_trait;
use millipi_types::HistoryRecord;

/// Append-only history of growth events.
///
/// Implementations must guarantee that no two successfully appended records
/// share a growth count, and that [`GrowthStore::load_latest`] returns the
/// record with the highest count.
#[async_trait]
pub trait GrowthStore: Send + Sync {
    /// Load the most recent history record, or `None` if no growth event
    /// has ever been recorded.
    async fn load_latest(&self) -> Result<Option<HistoryRecord>, StoreError>;

    /// Append a new history record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCount`] if a record with the same
    /// growth count already exists, or another [`StoreError`] if the store
    /// is unreachable. In every error case nothing has been persisted.
    async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError>;

    /// Number of records in the history.
    async fn count(&self) -> Result<u64, StoreError>;
}
