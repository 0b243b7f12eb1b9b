//! Precision policies: mapping the growth count to a target precision.
//!
//! The policy is a pure function and is pluggable. Whatever the curve, a
//! later count must never map to a smaller target than an earlier one.

use millipi_types::GrowthCount;

/// Derives the target number of fractional digits for a growth count.
///
/// Implementations must be non-decreasing in the count: for `m <= n`,
/// `target_precision(m) <= target_precision(n)`.
pub trait PrecisionPolicy: Send + Sync {
    /// Target precision (fractional digit count) for the given growth count.
    fn target_precision(&self, count: GrowthCount) -> u64;
}

/// The default policy: `n - 1`, saturating at 0.
///
/// The very first growth event targets zero digits, which renders the
/// documented seed expansion `"3.14"`; every later event adds one digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearPolicy;

impl PrecisionPolicy for LinearPolicy {
    fn target_precision(&self, count: GrowthCount) -> u64 {
        count.value().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_targets_zero_digits() {
        assert_eq!(LinearPolicy.target_precision(GrowthCount(1)), 0);
    }

    #[test]
    fn later_events_add_one_digit_each() {
        assert_eq!(LinearPolicy.target_precision(GrowthCount(2)), 1);
        assert_eq!(LinearPolicy.target_precision(GrowthCount(10)), 9);
        assert_eq!(LinearPolicy.target_precision(GrowthCount(1_000_001)), 1_000_000);
    }

    #[test]
    fn policy_is_monotonic() {
        let mut previous = 0;
        for count in 1..=200_u64 {
            let target = LinearPolicy.target_precision(GrowthCount(count));
            assert!(target >= previous, "policy decreased at count {count}");
            previous = target;
        }
    }

    #[test]
    fn zero_count_saturates() {
        // Count 0 never reaches the policy in practice (the first accepted
        // event is count 1), but saturation keeps the contract total.
        assert_eq!(LinearPolicy.target_precision(GrowthCount::ZERO), 0);
    }
}
