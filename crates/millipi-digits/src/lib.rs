//! Arbitrary-precision π digit generation for the Millipi growth engine.
//!
//! The generator is a pure function from a requested precision (number of
//! fractional decimal digits) to the digit string of π following `"3."`.
//! It is deterministic, stateless, and safe to invoke concurrently.
//!
//! # Design
//!
//! - **Fixed point, not floating point**: all arithmetic happens on big
//!   integers scaled by `10^(precision + GUARD_DIGITS)`, so truncation at
//!   the requested length is exact. Nothing ever rounds.
//! - **Guard digits**: both algorithms work at [`GUARD_DIGITS`] extra digits
//!   of precision and discard the tail, so downward error from truncating
//!   division and floor square roots never reaches the returned digits.
//! - **Interchangeable algorithms**: the Chudnovsky series and the
//!   Gauss–Legendre iteration implement the same contract and produce
//!   identical output; callers select one via [`Algorithm`].
//! - **Bounded work**: the precision ceiling is deployment-time
//!   configuration carried by the [`DigitGenerator`] value, protecting the
//!   process from unbounded memory and CPU use.

// Big-integer arithmetic does not overflow.
#![allow(clippy::arithmetic_side_effects)]

mod chudnovsky;
mod fixed;
mod gauss_legendre;

/// Number of extra working digits carried beyond the requested precision.
///
/// Both algorithms compute at `precision + GUARD_DIGITS` digits and truncate
/// the tail, so rounding noise in the last working digits never reaches the
/// returned expansion.
pub const GUARD_DIGITS: u64 = 15;

/// Errors produced by the digit generator.
///
/// A negative precision is unrepresentable here: the requested precision is
/// a `u64`, so the "invalid precision" failure of the contract is discharged
/// by the type system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Requested precision exceeds the configured hard ceiling.
    #[error("requested precision {requested} exceeds the configured ceiling of {ceiling} digits")]
    PrecisionTooLarge {
        /// The precision that was requested.
        requested: u64,
        /// The configured ceiling.
        ceiling: u64,
    },

    /// The algorithm name is not recognized.
    #[error("unknown digit algorithm \"{0}\" (expected \"chudnovsky\" or \"gauss-legendre\")")]
    UnknownAlgorithm(String),
}

/// Convergence algorithm used to produce the digits.
///
/// Both variants honor the same contract; they differ only in how fast they
/// converge and how much work a single step performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Rapidly converging series; roughly 14 correct digits per term.
    #[default]
    Chudnovsky,
    /// Quadratically convergent AM/GM iteration; digits double per pass.
    GaussLegendre,
}

impl core::str::FromStr for Algorithm {
    type Err = GeneratorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "chudnovsky" => Ok(Self::Chudnovsky),
            "gauss-legendre" | "gauss_legendre" => Ok(Self::GaussLegendre),
            other => Err(GeneratorError::UnknownAlgorithm(other.to_owned())),
        }
    }
}

/// Stateless π digit generator.
///
/// Cheap to copy; the only state is the selected [`Algorithm`] and the
/// precision ceiling, both fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGenerator {
    algorithm: Algorithm,
    max_precision: u64,
}

impl DigitGenerator {
    /// Default precision ceiling when none is configured.
    pub const DEFAULT_MAX_PRECISION: u64 = 1_000_000;

    /// Create a generator with the given algorithm and precision ceiling.
    pub const fn new(algorithm: Algorithm, max_precision: u64) -> Self {
        Self {
            algorithm,
            max_precision,
        }
    }

    /// Return the selected algorithm.
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Return the configured precision ceiling.
    pub const fn max_precision(&self) -> u64 {
        self.max_precision
    }

    /// Compute exactly `precision` fractional digits of π.
    ///
    /// The returned string contains only the digits following `"3."`; a
    /// precision of zero yields the empty string. Identical precision always
    /// yields identical digits, and increasing the precision only appends
    /// digits, never changes earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::PrecisionTooLarge`] if `precision` exceeds
    /// the configured ceiling.
    pub fn generate(&self, precision: u64) -> Result<String, GeneratorError> {
        if precision > self.max_precision {
            return Err(GeneratorError::PrecisionTooLarge {
                requested: precision,
                ceiling: self.max_precision,
            });
        }
        if precision == 0 {
            return Ok(String::new());
        }

        let scaled = match self.algorithm {
            Algorithm::Chudnovsky => chudnovsky::pi_scaled(precision),
            Algorithm::GaussLegendre => gauss_legendre::pi_scaled(precision),
        };
        let digits = fixed::fractional_digits(&scaled, precision);

        tracing::debug!(precision, algorithm = ?self.algorithm, "generated digits");
        Ok(digits)
    }
}

impl Default for DigitGenerator {
    fn default() -> Self {
        Self::new(Algorithm::default(), Self::DEFAULT_MAX_PRECISION)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use core::str::FromStr;

    use super::*;

    /// First 100 fractional digits of π.
    const PI_100: &str = "1415926535897932384626433832795028841971693993751\
                          058209749445923078164062862089986280348253421170679";

    fn known(precision: usize) -> &'static str {
        &PI_100[..precision]
    }

    fn generate(algorithm: Algorithm, precision: u64) -> String {
        DigitGenerator::new(algorithm, DigitGenerator::DEFAULT_MAX_PRECISION)
            .generate(precision)
            .unwrap()
    }

    #[test]
    fn chudnovsky_matches_first_50_digits() {
        assert_eq!(
            generate(Algorithm::Chudnovsky, 50),
            "14159265358979323846264338327950288419716939937510",
        );
    }

    #[test]
    fn gauss_legendre_matches_first_50_digits() {
        assert_eq!(
            generate(Algorithm::GaussLegendre, 50),
            "14159265358979323846264338327950288419716939937510",
        );
    }

    #[test]
    fn both_algorithms_match_first_100_digits() {
        assert_eq!(generate(Algorithm::Chudnovsky, 100), known(100));
        assert_eq!(generate(Algorithm::GaussLegendre, 100), known(100));
    }

    #[test]
    fn algorithms_agree_across_precisions() {
        for precision in [1, 7, 14, 15, 33, 64, 99] {
            assert_eq!(
                generate(Algorithm::Chudnovsky, precision),
                generate(Algorithm::GaussLegendre, precision),
                "algorithms disagree at precision {precision}",
            );
        }
    }

    #[test]
    fn increasing_precision_only_appends_digits() {
        for algorithm in [Algorithm::Chudnovsky, Algorithm::GaussLegendre] {
            let long = generate(algorithm, 99);
            for precision in [1_u64, 5, 20, 60, 98] {
                let short = generate(algorithm, precision);
                assert!(
                    long.starts_with(&short),
                    "truncation instability at precision {precision} for {algorithm:?}",
                );
            }
        }
    }

    #[test]
    fn zero_precision_yields_no_digits() {
        assert_eq!(generate(Algorithm::Chudnovsky, 0), "");
        assert_eq!(generate(Algorithm::GaussLegendre, 0), "");
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(
            generate(Algorithm::Chudnovsky, 64),
            generate(Algorithm::Chudnovsky, 64),
        );
    }

    #[test]
    fn ceiling_is_enforced() {
        let generator = DigitGenerator::new(Algorithm::Chudnovsky, 10);
        assert!(generator.generate(10).is_ok());
        assert_eq!(
            generator.generate(11),
            Err(GeneratorError::PrecisionTooLarge {
                requested: 11,
                ceiling: 10,
            }),
        );
    }

    #[test]
    fn algorithm_parses_from_config_names() {
        assert_eq!(Algorithm::from_str("chudnovsky").unwrap(), Algorithm::Chudnovsky);
        assert_eq!(
            Algorithm::from_str("gauss-legendre").unwrap(),
            Algorithm::GaussLegendre,
        );
        assert_eq!(
            Algorithm::from_str("gauss_legendre").unwrap(),
            Algorithm::GaussLegendre,
        );
        assert!(Algorithm::from_str("archimedes").is_err());
    }

    #[test]
    fn default_generator_uses_chudnovsky() {
        let generator = DigitGenerator::default();
        assert_eq!(generator.algorithm(), Algorithm::Chudnovsky);
        assert_eq!(generator.max_precision(), DigitGenerator::DEFAULT_MAX_PRECISION);
    }
}
