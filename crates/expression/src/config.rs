//! Search tuning parameters.

use crate::error::ExpressionError;
use crate::symbol::{DEFAULT_SYMBOLS, Symbol};

/// Tuning parameters for candidate expression construction.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use nerdyversary_expression::{ConstructConfig, Symbol};
///
/// let config = ConstructConfig::new()
///     .with_max_power(3)
///     .with_factor_lim(5)
///     .with_symbols(vec![Symbol::Pi, Symbol::E]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructConfig {
    /// Symbols available to candidate expressions.
    symbols: Vec<Symbol>,
    /// Largest exponent considered for a symbol.
    max_power: u32,
    /// Maximum distance, in days, between a candidate and the target.
    tolerance_days: f64,
    /// Largest integer accepted for either factor of the fraction.
    factor_lim: u64,
}

impl ConstructConfig {
    /// Creates a configuration with the default tuning.
    ///
    /// Defaults: symbols `pi, e, phi`, `max_power = 5`,
    /// `tolerance_days = 0.5`, `factor_lim = 10`.
    pub fn new() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.to_vec(),
            max_power: 5,
            tolerance_days: 0.5,
            factor_lim: 10,
        }
    }

    /// Sets the symbol set.
    pub fn with_symbols(mut self, symbols: Vec<Symbol>) -> Self {
        self.symbols = symbols;
        self
    }

    /// Sets the largest exponent considered for a symbol.
    pub fn with_max_power(mut self, max_power: u32) -> Self {
        self.max_power = max_power;
        self
    }

    /// Sets the match tolerance in days.
    pub fn with_tolerance_days(mut self, tolerance_days: f64) -> Self {
        self.tolerance_days = tolerance_days;
        self
    }

    /// Sets the largest accepted integer factor.
    pub fn with_factor_lim(mut self, factor_lim: u64) -> Self {
        self.factor_lim = factor_lim;
        self
    }

    /// Returns the symbol set.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the largest exponent considered for a symbol.
    pub fn max_power(&self) -> u32 {
        self.max_power
    }

    /// Returns the match tolerance in days.
    pub fn tolerance_days(&self) -> f64 {
        self.tolerance_days
    }

    /// Returns the largest accepted integer factor.
    pub fn factor_lim(&self) -> u64 {
        self.factor_lim
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the factor limit is zero, the tolerance is not
    /// finite or not positive, or the symbol set has fewer than two
    /// members or repeats one.
    pub fn validate(&self) -> Result<(), ExpressionError> {
        if self.factor_lim < 1 {
            return Err(ExpressionError::InvalidFactorLim {
                factor_lim: self.factor_lim,
            });
        }
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err(ExpressionError::InvalidTolerance {
                tolerance: self.tolerance_days,
            });
        }
        if self.symbols.len() < 2 {
            return Err(ExpressionError::TooFewSymbols {
                count: self.symbols.len(),
            });
        }
        for (i, &symbol) in self.symbols.iter().enumerate() {
            if self.symbols[..i].contains(&symbol) {
                return Err(ExpressionError::DuplicateSymbol { symbol });
            }
        }
        Ok(())
    }
}

impl Default for ConstructConfig {
    fn default() -> Self {
        Self::new()
    }
}
