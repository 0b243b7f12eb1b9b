//! Gauss–Legendre iteration in fixed point.
//!
//! The iteration converges quadratically: each pass roughly doubles the
//! number of correct digits, so `max(5, ceil(log2(precision)))` passes are
//! enough to clear the requested precision plus the guard digits. Each pass
//! performs an arithmetic-mean/geometric-mean update pair and adjusts an
//! auxiliary accumulator by the squared difference of successive arithmetic
//! means; the result is `(a + b)^2 / (4t)`.

use num_bigint::BigInt;
use num_integer::Roots;

use crate::fixed::working_scale;

/// π at the working scale `10^(precision + GUARD)`.
///
/// Precondition: `precision >= 1` (the zero-digit case never reaches the
/// algorithms).
pub(crate) fn pi_scaled(precision: u64) -> BigInt {
    let scale = working_scale(precision);

    // a = 1, b = 1/sqrt(2), t = 1/4 at the working scale; p = 1 exactly.
    let mut arithmetic = scale.clone();
    let mut geometric = (&scale * &scale / BigInt::from(2_u8)).sqrt();
    let mut adjustment = &scale / BigInt::from(4_u8);
    let mut power = BigInt::from(1_u8);

    for _ in 0..iterations(precision) {
        let next_arithmetic = (&arithmetic + &geometric) / BigInt::from(2_u8);
        let next_geometric = (&arithmetic * &geometric).sqrt();
        let diff = &arithmetic - &next_arithmetic;
        adjustment -= &power * &diff * &diff / &scale;
        power *= BigInt::from(2_u8);
        arithmetic = next_arithmetic;
        geometric = next_geometric;
    }

    let mean_sum = &arithmetic + &geometric;
    &mean_sum * &mean_sum / (BigInt::from(4_u8) * adjustment)
}

/// `max(5, ceil(log2(precision)))` for `precision >= 1`.
const fn iterations(precision: u64) -> u32 {
    let bits = 64_u32.saturating_sub(precision.saturating_sub(1).leading_zeros());
    if bits < 5 { 5 } else { bits }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_count_floors_at_five() {
        assert_eq!(iterations(1), 5);
        assert_eq!(iterations(16), 5);
        assert_eq!(iterations(32), 5);
    }

    #[test]
    fn iteration_count_grows_with_precision() {
        assert_eq!(iterations(33), 6);
        assert_eq!(iterations(50), 6);
        assert_eq!(iterations(1000), 10);
        assert_eq!(iterations(1_000_000), 20);
    }
}
