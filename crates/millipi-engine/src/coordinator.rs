//! The growth coordinator: one counter, one growth at a time.
//!
//! The coordinator owns the authoritative [`GrowthCount`] and serializes
//! growth requests behind a [`tokio::sync::Mutex`], so the whole
//! read-increment-compute-persist-publish sequence behaves as a single
//! transaction with respect to other callers:
//!
//! - no two requests ever compute digits for the same count,
//! - no increment is ever lost,
//! - the counter advances only after generation *and* persistence both
//!   succeeded -- a failed attempt leaves the state exactly as it was,
//! - expansions are published in the order their counts were assigned.
//!
//! Reads ([`GrowthCoordinator::current_expansion`]) never touch the counter
//! lock: they are served from the broadcaster's latest slot, so an in-flight
//! growth does not block them and they never observe a torn value.

use std::sync::Arc;

use millipi_digits::DigitGenerator;
use millipi_store::GrowthStore;
use millipi_types::{GrowthCount, HistoryRecord, PiExpansion};
use tokio::sync::Mutex;
use tracing::info;

use crate::broadcast::{Broadcaster, Subscription};
use crate::error::GrowthError;
use crate::policy::PrecisionPolicy;

/// Serializes growth events and owns the authoritative growth state.
pub struct GrowthCoordinator<S> {
    store: S,
    generator: DigitGenerator,
    policy: Arc<dyn PrecisionPolicy>,
    broadcaster: Broadcaster,
    counter: Mutex<GrowthCount>,
}

impl<S: GrowthStore> GrowthCoordinator<S> {
    /// Create a coordinator starting from a fresh state (count zero, no
    /// latest expansion). Use [`GrowthCoordinator::bootstrap`] to restore
    /// persisted state instead.
    pub fn new(
        store: S,
        generator: DigitGenerator,
        policy: Arc<dyn PrecisionPolicy>,
        broadcaster: Broadcaster,
    ) -> Self {
        Self {
            store,
            generator,
            policy,
            broadcaster,
            counter: Mutex::new(GrowthCount::ZERO),
        }
    }

    /// Create a coordinator seeded from the durable store.
    ///
    /// Restores the growth count and the latest expansion from the most
    /// recent history record, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::Persistence`] if the store cannot be read.
    pub async fn bootstrap(
        store: S,
        generator: DigitGenerator,
        policy: Arc<dyn PrecisionPolicy>,
        broadcaster: Broadcaster,
    ) -> Result<Self, GrowthError> {
        let latest = store.load_latest().await.map_err(GrowthError::Persistence)?;
        let count = latest
            .as_ref()
            .map_or(GrowthCount::ZERO, |record| record.growth_count);

        let coordinator = Self {
            store,
            generator,
            policy,
            broadcaster,
            counter: Mutex::new(count),
        };

        if let Some(record) = latest {
            coordinator.broadcaster.seed(record.expansion);
            info!(count = %count, "restored growth state from store");
        }

        Ok(coordinator)
    }

    /// Apply one growth event: advance the counter, compute the expansion
    /// for the new count, persist it, and publish it to all subscribers.
    ///
    /// Requests are serialized; a request that arrives while another is
    /// computing waits its turn and then operates on the committed state.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError`] if digit generation or persistence fails.
    /// In every error case the growth count is unchanged and nothing was
    /// published; the caller may retry the whole call.
    pub async fn grow(&self) -> Result<HistoryRecord, GrowthError> {
        // Serialize: only one growth request may be computing at a time.
        let mut counter = self.counter.lock().await;

        let next = counter.next().ok_or(GrowthError::CounterOverflow)?;
        let precision = self.policy.target_precision(next);

        // CPU-bound digit generation runs on the blocking pool, with the
        // precision fixed before the work starts.
        let generator = self.generator;
        let digits = tokio::task::spawn_blocking(move || generator.generate(precision))
            .await
            .map_err(|e| GrowthError::Aborted(e.to_string()))??;

        let record = HistoryRecord::new(next, PiExpansion::from_digits(&digits));
        self.store.append(&record).await?;

        // Commit only after generation and persistence both succeeded.
        *counter = next;
        let delivered = self.broadcaster.publish(&record.expansion);

        info!(
            count = %next,
            precision,
            subscribers = delivered,
            "growth event committed"
        );
        Ok(record)
    }

    /// The latest successfully persisted expansion, or the documented
    /// `"3.14"` seed if no growth event has ever completed.
    ///
    /// Never blocks on an in-flight [`GrowthCoordinator::grow`]: an ongoing
    /// growth is observed as the previous value until it commits.
    pub fn current_expansion(&self) -> PiExpansion {
        self.broadcaster.latest().unwrap_or_else(PiExpansion::seed)
    }

    /// The current committed growth count.
    pub async fn growth_count(&self) -> GrowthCount {
        *self.counter.lock().await
    }

    /// Register a subscriber for future expansions (with replay-of-one of
    /// the latest known expansion, when one exists).
    pub fn subscribe(&self) -> Subscription {
        self.broadcaster.subscribe()
    }

    /// Access the broadcaster (e.g. for a push-transport adapter).
    pub const fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// Access the underlying store (audit reads).
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for GrowthCoordinator<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrowthCoordinator")
            .field("store", &self.store)
            .field("generator", &self.generator)
            .field("broadcaster", &self.broadcaster)
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
