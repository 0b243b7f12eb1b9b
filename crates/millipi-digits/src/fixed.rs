//! Fixed-point big-integer helpers shared by both convergence algorithms.
//!
//! A value `v` is represented as the integer `v * 10^(precision + GUARD)`.
//! Every operation stays in the integers: division is truncating (toward
//! zero, which is floor for the non-negative operands used here) and square
//! roots are floor integer square roots. Nothing ever rounds upward, so the
//! guard digits absorb all accumulated downward error before the tail is
//! discarded.

use num_bigint::BigInt;

use crate::GUARD_DIGITS;

/// `10^exp` as a big integer.
///
/// The exponent is bounded by the configured precision ceiling plus the
/// guard digits, which callers enforce before reaching this module.
pub(crate) fn pow10(exp: u64) -> BigInt {
    let exp = usize::try_from(exp).unwrap_or(usize::MAX);
    num_traits::pow(BigInt::from(10_u8), exp)
}

/// The working scale for a requested precision: `10^(precision + GUARD)`.
pub(crate) fn working_scale(precision: u64) -> BigInt {
    pow10(precision.saturating_add(GUARD_DIGITS))
}

/// Extract exactly `precision` fractional digits from a value of π held at
/// the working scale, discarding (never rounding) the guard digits.
pub(crate) fn fractional_digits(pi: &BigInt, precision: u64) -> String {
    // Drop the guard digits, leaving pi at scale 10^precision.
    let truncated = pi / pow10(GUARD_DIGITS);
    // Remove the leading "3"; what remains are the fractional digits.
    let fractional = truncated - BigInt::from(3_u8) * pow10(precision);

    let digits = fractional.to_str_radix(10);
    let width = usize::try_from(precision).unwrap_or(usize::MAX);

    // Left-pad with zeros: a fractional part beginning with zeros must keep
    // them to stay exactly `precision` characters long.
    let mut padded = String::with_capacity(width);
    let mut zeros = width.saturating_sub(digits.len());
    while zeros > 0 {
        padded.push('0');
        zeros = zeros.saturating_sub(1);
    }
    padded.push_str(&digits);
    padded
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn pow10_small_values() {
        assert_eq!(pow10(0), BigInt::from(1_u8));
        assert_eq!(pow10(3), BigInt::from(1000_u32));
    }

    #[test]
    fn fractional_digits_preserve_leading_zeros() {
        // 3.04 at precision 2 with guard digits: 3.04 * 10^(2 + GUARD).
        let value = BigInt::from(304_u32) * pow10(GUARD_DIGITS);
        assert_eq!(fractional_digits(&value, 2), "04");
    }

    #[test]
    fn fractional_digits_exact_width() {
        let value = BigInt::from(314_159_u32) * pow10(GUARD_DIGITS);
        assert_eq!(fractional_digits(&value, 5), "14159");
    }
}
