//! Fan-out of newly computed expansions to subscribers.
//!
//! Built on a capacity-bounded [`tokio::sync::broadcast`] channel: every
//! subscriber sees the same stream in the same order, and a slow subscriber
//! lags on its own receiver without blocking the publisher or its peers.
//! If a subscriber falls behind by more than the channel capacity, the
//! skipped elements are dropped for that subscriber only and it resumes at
//! the newest expansion.
//!
//! Late joiners get replay-of-one: the most recently published (or seeded)
//! expansion is delivered as the subscription's first element. The replay
//! snapshot and receiver registration happen under the same lock `publish`
//! takes, so a new subscriber sees each expansion exactly once -- either as
//! its replay or as a live element, never both, never neither.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use millipi_types::PiExpansion;
use tokio::sync::broadcast;

/// Default capacity of the broadcast channel.
///
/// A subscriber that falls behind by more than this many expansions skips
/// ahead to the newest one.
pub const DEFAULT_CAPACITY: usize = 256;

/// Fan-out of [`PiExpansion`] values to any number of subscribers.
#[derive(Debug)]
pub struct Broadcaster {
    /// The most recently published (or seeded) expansion, replayed to new
    /// subscribers. Readers proceed concurrently; `publish` takes the write
    /// side so no reader ever observes a value mid-mutation.
    latest: RwLock<Option<PiExpansion>>,
    /// Broadcast sender; receivers are created per subscription.
    tx: broadcast::Sender<PiExpansion>,
}

impl Broadcaster {
    /// Create a broadcaster with the given per-subscriber channel capacity.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            latest: RwLock::new(None),
            tx,
        }
    }

    /// Register a new subscriber.
    ///
    /// The subscription's first element is the latest known expansion, if
    /// any has ever been published or seeded; thereafter it yields every
    /// published expansion in publication order. The replay snapshot and
    /// the receiver registration happen while the latest slot is held, so
    /// relative to any `publish` the subscriber sees each expansion exactly
    /// once -- as its replay or as a live element.
    pub fn subscribe(&self) -> Subscription {
        let slot = self.read_latest();
        let rx = self.tx.subscribe();
        Subscription {
            replay: slot.clone(),
            rx: Some(rx),
        }
    }

    /// Publish an expansion to all current subscribers.
    ///
    /// Returns the number of subscribers the expansion was delivered to.
    /// Zero subscribers is not an error. Never blocks: each subscriber
    /// consumes from its own receiver at its own pace.
    pub fn publish(&self, expansion: &PiExpansion) -> usize {
        let mut slot = self.write_latest();
        *slot = Some(expansion.clone());
        // send returns Err only when there are zero receivers, which is
        // normal when no subscriber is connected.
        self.tx.send(expansion.clone()).unwrap_or(0)
    }

    /// Pre-load the replay slot without emitting to live subscribers.
    ///
    /// Used at startup to restore the latest persisted expansion.
    pub fn seed(&self, expansion: PiExpansion) {
        *self.write_latest() = Some(expansion);
    }

    /// The latest known expansion, if any.
    pub fn latest(&self) -> Option<PiExpansion> {
        self.read_latest().clone()
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Read-lock the replay slot, recovering from a poisoned lock (the
    /// slot holds a plain value, so a panicking writer cannot leave it
    /// torn).
    fn read_latest(&self) -> RwLockReadGuard<'_, Option<PiExpansion>> {
        self.latest.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write-lock the replay slot; see [`Broadcaster::read_latest`].
    fn write_latest(&self) -> RwLockWriteGuard<'_, Option<PiExpansion>> {
        self.latest.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// A live subscription: a lazy, non-restartable sequence of expansions.
///
/// Dropping the handle unsubscribes; [`Subscription::close`] does the same
/// explicitly and is idempotent.
#[derive(Debug)]
pub struct Subscription {
    replay: Option<PiExpansion>,
    rx: Option<broadcast::Receiver<PiExpansion>>,
}

impl Subscription {
    /// Receive the next expansion.
    ///
    /// The first call yields the replayed latest expansion when one existed
    /// at subscription time. Returns `None` once the subscription is closed
    /// or the broadcaster has been dropped. If this subscriber lagged, the
    /// skipped elements are dropped and the sequence resumes at the oldest
    /// retained expansion.
    pub async fn recv(&mut self) -> Option<PiExpansion> {
        if let Some(first) = self.replay.take() {
            return Some(first);
        }
        let rx = self.rx.as_mut()?;
        loop {
            match rx.recv().await {
                Ok(expansion) => return Some(expansion),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "subscriber lagged, resuming at newest expansion");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    self.rx = None;
                    return None;
                }
            }
        }
    }

    /// Close the subscription. Idempotent; no further elements are
    /// delivered after this returns.
    pub fn close(&mut self) {
        self.replay = None;
        self.rx = None;
    }

    /// Whether the subscription has been closed (or exhausted).
    pub const fn is_closed(&self) -> bool {
        self.rx.is_none() && self.replay.is_none()
    }
}
