//! Chudnovsky series evaluation in fixed point.
//!
//! Each term of the series contributes roughly 14 correct decimal digits,
//! so `ceil(precision / 14) + 1` terms suffice. Four running accumulators
//! are updated per step with the closed-form recurrences; the result is
//! `426880 * sqrt(10005) / sum`.

use num_bigint::BigInt;
use num_integer::Roots;

use crate::fixed::working_scale;

/// π at the working scale `10^(precision + GUARD)`.
///
/// Precondition: `precision >= 1` (the zero-digit case never reaches the
/// algorithms).
pub(crate) fn pi_scaled(precision: u64) -> BigInt {
    let scale = working_scale(precision);

    // C = 426880 * sqrt(10005), held at the working scale.
    let constant = BigInt::from(426_880_u32) * (BigInt::from(10_005_u32) * &scale * &scale).sqrt();

    let mut linear = BigInt::from(13_591_409_u32);
    let mut multiplicative = scale.clone();
    let mut binomial = BigInt::from(1_u8);
    let mut k = BigInt::from(6_u8);
    let mut sum = BigInt::from(13_591_409_u32) * &scale;

    let terms = precision.div_ceil(14).saturating_add(1);
    for i in 1..terms {
        let cube = {
            let n = BigInt::from(i);
            &n * &n * &n
        };
        multiplicative = multiplicative * (&k * &k * &k - BigInt::from(16_u8) * &k) / cube;
        linear += BigInt::from(545_140_134_u32);
        binomial *= BigInt::from(-262_537_412_640_768_000_i64);
        sum += &multiplicative * &linear / &binomial;
        k += BigInt::from(12_u8);
    }

    constant * &scale / sum
}
