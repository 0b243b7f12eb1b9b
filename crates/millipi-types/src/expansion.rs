//! The materialized decimal expansion of π.
//!
//! [`PiExpansion`] is an immutable decimal string of the form `"3." + digits`.
//! A new expansion is produced for every growth event; earlier expansions are
//! never mutated, only superseded.
//!
//! # The zero-digit edge case
//!
//! The very first growth event targets a precision of zero fractional
//! digits. Rather than materializing the degenerate string `"3."`, a target
//! of zero digits renders the documented seed expansion [`PiExpansion::SEED`]
//! (`"3.14"`), which is also what readers observe before any growth event
//! has been recorded.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An immutable decimal expansion of π (`"3." + digits`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PiExpansion(String);

impl PiExpansion {
    /// The documented seed expansion, served before any growth event has
    /// been recorded and rendered for a target precision of zero digits.
    pub const SEED: &'static str = "3.14";

    /// Return the seed expansion.
    pub fn seed() -> Self {
        Self(Self::SEED.to_owned())
    }

    /// Build an expansion from the fractional digits following `"3."`.
    ///
    /// An empty digit string yields the seed expansion (see the module
    /// documentation for the zero-digit edge case). The caller supplies
    /// decimal digit characters only; the digit generator guarantees this.
    pub fn from_digits(digits: &str) -> Self {
        if digits.is_empty() {
            return Self::seed();
        }
        Self(format!("3.{digits}"))
    }

    /// Return the expansion as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of materialized fractional digits.
    ///
    /// Note that the seed expansion reports 2 even though it stands in for
    /// a target precision of zero.
    pub fn precision(&self) -> usize {
        self.0.len().saturating_sub(2)
    }

    /// Consume the expansion and return the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for PiExpansion {
    fn default() -> Self {
        Self::seed()
    }
}

impl core::fmt::Display for PiExpansion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PiExpansion {
    /// Wrap a previously rendered expansion (e.g. one loaded from the
    /// durable store).
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PiExpansion {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
