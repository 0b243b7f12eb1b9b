//! Growth coordination and broadcast for the Millipi precision growth
//! engine.
//!
//! This crate ties the workspace together: it owns the growth counter,
//! derives each event's target precision, drives the digit generator, and
//! fans the result out to subscribers.
//!
//! # Architecture
//!
//! ```text
//! growth request
//!     |
//!     v
//! GrowthCoordinator (one at a time)
//!     |-- PrecisionPolicy       count -> target precision
//!     |-- DigitGenerator        precision -> digits (blocking pool)
//!     |-- GrowthStore           append HistoryRecord (millipi-store)
//!     +-- Broadcaster           publish to all subscribers
//!                                   |-- Subscription (replay-of-one, then live)
//!                                   +-- Subscription ...
//! ```
//!
//! # Modules
//!
//! - [`coordinator`] -- Serialized growth transactions
//! - [`policy`] -- Pluggable count-to-precision mapping
//! - [`broadcast`] -- Fan-out with replay-of-one for late joiners
//! - [`config`] -- YAML configuration (algorithm, ceiling, infrastructure)
//! - [`error`] -- Growth attempt errors

pub mod broadcast;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod policy;

// Re-export primary types for convenience.
pub use broadcast::{Broadcaster, Subscription};
pub use config::{ConfigError, EngineConfig};
pub use coordinator::GrowthCoordinator;
pub use error::GrowthError;
pub use policy::{LinearPolicy, PrecisionPolicy};
