//! The growth event counter.
//!
//! [`GrowthCount`] is the number of growth events applied since the system
//! first started. It is owned exclusively by the growth coordinator, only
//! ever advances by one, and never decreases. Advancing is checked: the
//! counter refuses to wrap at `u64::MAX`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of growth events applied since system start.
///
/// A fresh system starts at [`GrowthCount::ZERO`]; the first accepted growth
/// event produces count 1. The counter is monotonically non-decreasing for
/// the lifetime of the process and across restarts (it is restored from the
/// durable store at startup).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct GrowthCount(pub u64);

impl GrowthCount {
    /// The count before any growth event has been applied.
    pub const ZERO: Self = Self(0);

    /// Return the raw counter value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Return the counter advanced by one, or `None` if the counter would
    /// overflow `u64::MAX`.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl core::fmt::Display for GrowthCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GrowthCount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<GrowthCount> for u64 {
    fn from(count: GrowthCount) -> Self {
        count.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_the_default() {
        assert_eq!(GrowthCount::default(), GrowthCount::ZERO);
        assert_eq!(GrowthCount::ZERO.value(), 0);
    }

    #[test]
    fn next_advances_by_one() {
        let count = GrowthCount::ZERO.next().unwrap();
        assert_eq!(count, GrowthCount(1));
        assert_eq!(count.next().unwrap(), GrowthCount(2));
    }

    #[test]
    fn next_refuses_to_wrap() {
        assert_eq!(GrowthCount(u64::MAX).next(), None);
    }

    #[test]
    fn counts_are_ordered() {
        assert!(GrowthCount(1) < GrowthCount(2));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&GrowthCount(42)).unwrap();
        assert_eq!(json, "42");
    }
}
