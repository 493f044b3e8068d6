//! Error types for the nerdyversary-scan crate.

use nerdyversary_expression::ExpressionError;

/// Error type for all fallible operations in the nerdyversary-scan crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    /// An underlying expression search failed, e.g. because the tuning
    /// parameters did not validate.
    #[error(transparent)]
    Expression(#[from] ExpressionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_passes_through_expression_display() {
        let err = ScanError::from(ExpressionError::InvalidFactorLim { factor_lim: 0 });
        assert_eq!(
            err.to_string(),
            "invalid factor limit: 0 (must be at least 1)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ScanError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ScanError>();
    }
}
