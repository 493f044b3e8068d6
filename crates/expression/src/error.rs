//! Error types for the nerdyversary-expression crate.

use crate::symbol::Symbol;

/// Error type for all fallible operations in the nerdyversary-expression
/// crate.
///
/// Covers tuning-parameter validation, candidate-invariant violations, and
/// the distinguished no-match outcome of the find-first search mode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    /// Returned when the factor limit is zero.
    #[error("invalid factor limit: {factor_lim} (must be at least 1)")]
    InvalidFactorLim {
        /// The invalid factor limit that was provided.
        factor_lim: u64,
    },

    /// Returned when the tolerance is not finite or not positive.
    #[error("invalid tolerance: {tolerance} days (must be finite and positive)")]
    InvalidTolerance {
        /// The invalid tolerance that was provided.
        tolerance: f64,
    },

    /// Returned when fewer than two symbols are configured.
    #[error("too few symbols: {count} (need at least 2 distinct symbols)")]
    TooFewSymbols {
        /// The number of symbols that was provided.
        count: usize,
    },

    /// Returned when the configured symbol set contains a symbol twice.
    #[error("duplicate symbol in symbol set: {symbol}")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: Symbol,
    },

    /// Returned when a target duration is not finite or negative.
    #[error("invalid duration: {duration} years (must be finite and non-negative)")]
    InvalidDuration {
        /// The invalid duration that was provided.
        duration: f64,
    },

    /// Returned when a candidate factor is zero.
    #[error("invalid factor: {factor} (must be at least 1)")]
    InvalidFactor {
        /// The invalid factor that was provided.
        factor: u64,
    },

    /// Returned when a symbol power is constructed with exponent zero.
    #[error("zero exponent for symbol {symbol}")]
    ZeroExponent {
        /// The symbol the zero exponent was given for.
        symbol: Symbol,
    },

    /// Returned when numerator and denominator carry the same symbol.
    #[error("equal symbols in numerator and denominator: {symbol}")]
    EqualSymbols {
        /// The shared symbol.
        symbol: Symbol,
    },

    /// Returned when a candidate carries no symbol at all.
    #[error("expression without symbols degenerates to a plain rational")]
    DegenerateRational,

    /// Returned by the find-first mode when no candidate is within
    /// tolerance.
    #[error("no nerdyversary found for a duration of {duration} years")]
    NoMatch {
        /// The duration that was searched.
        duration: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_factor_lim() {
        let err = ExpressionError::InvalidFactorLim { factor_lim: 0 };
        assert_eq!(
            err.to_string(),
            "invalid factor limit: 0 (must be at least 1)"
        );
    }

    #[test]
    fn error_invalid_tolerance() {
        let err = ExpressionError::InvalidTolerance { tolerance: -0.5 };
        assert_eq!(
            err.to_string(),
            "invalid tolerance: -0.5 days (must be finite and positive)"
        );
    }

    #[test]
    fn error_too_few_symbols() {
        let err = ExpressionError::TooFewSymbols { count: 1 };
        assert_eq!(
            err.to_string(),
            "too few symbols: 1 (need at least 2 distinct symbols)"
        );
    }

    #[test]
    fn error_duplicate_symbol() {
        let err = ExpressionError::DuplicateSymbol { symbol: Symbol::Pi };
        assert_eq!(err.to_string(), "duplicate symbol in symbol set: pi");
    }

    #[test]
    fn error_invalid_duration() {
        let err = ExpressionError::InvalidDuration { duration: -2.0 };
        assert_eq!(
            err.to_string(),
            "invalid duration: -2 years (must be finite and non-negative)"
        );
    }

    #[test]
    fn error_equal_symbols() {
        let err = ExpressionError::EqualSymbols { symbol: Symbol::E };
        assert_eq!(
            err.to_string(),
            "equal symbols in numerator and denominator: e"
        );
    }

    #[test]
    fn error_no_match() {
        let err = ExpressionError::NoMatch { duration: 6.5 };
        assert_eq!(
            err.to_string(),
            "no nerdyversary found for a duration of 6.5 years"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ExpressionError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ExpressionError>();
    }

    #[test]
    fn error_is_clone() {
        let err = ExpressionError::DegenerateRational;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
