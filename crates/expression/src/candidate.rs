//! Canonical candidate expressions.

use std::fmt;

use crate::error::ExpressionError;
use crate::symbol::Symbol;

/// A symbol raised to a positive integer power.
///
/// Exponent zero is never stored; a missing symbol side of a [`Candidate`]
/// is represented by `None` instead, so equality and ordering see one
/// canonical form per mathematical expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolPower {
    symbol: Symbol,
    exponent: u32,
}

impl SymbolPower {
    /// Creates a new `SymbolPower`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::ZeroExponent`] if `exponent` is zero.
    pub fn new(symbol: Symbol, exponent: u32) -> Result<Self, ExpressionError> {
        if exponent == 0 {
            return Err(ExpressionError::ZeroExponent { symbol });
        }
        Ok(Self { symbol, exponent })
    }

    /// Returns the symbol.
    pub fn symbol(self) -> Symbol {
        self.symbol
    }

    /// Returns the exponent (always at least 1).
    pub fn exponent(self) -> u32 {
        self.exponent
    }

    /// Returns the numeric value of the power.
    pub fn value(self) -> f64 {
        self.symbol.value().powi(self.exponent as i32)
    }

    fn fmt_plain(self) -> String {
        if self.exponent == 1 {
            self.symbol.name().to_string()
        } else {
            format!("{}^{}", self.symbol.name(), self.exponent)
        }
    }

    fn fmt_latex(self) -> String {
        if self.exponent == 1 {
            self.symbol.latex().to_string()
        } else {
            format!("{}^{{{}}}", self.symbol.latex(), self.exponent)
        }
    }
}

impl fmt::Display for SymbolPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt_plain())
    }
}

/// A candidate expression `(a * S^e1) / (b * T^e2)` in canonical form.
///
/// The factors `a` and `b` are positive integers in lowest terms; each of
/// the two symbol powers is optional (absence encodes exponent zero), at
/// least one is present, and when both are present their symbols differ.
///
/// Equality, hashing and ordering derive from the canonical form, so
/// candidates that differ only in a zero-power symbol compare equal. The
/// ordering compares `(numer_factor, numer, denom_factor, denom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Candidate {
    numer_factor: u64,
    numer: Option<SymbolPower>,
    denom_factor: u64,
    denom: Option<SymbolPower>,
}

impl Candidate {
    /// Creates a new `Candidate` from its canonical parts.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::InvalidFactor`] if either factor is zero,
    /// [`ExpressionError::DegenerateRational`] if both symbol powers are
    /// absent, and [`ExpressionError::EqualSymbols`] if both are present
    /// with the same symbol.
    pub fn new(
        numer_factor: u64,
        numer: Option<SymbolPower>,
        denom_factor: u64,
        denom: Option<SymbolPower>,
    ) -> Result<Self, ExpressionError> {
        if numer_factor == 0 {
            return Err(ExpressionError::InvalidFactor { factor: numer_factor });
        }
        if denom_factor == 0 {
            return Err(ExpressionError::InvalidFactor { factor: denom_factor });
        }
        match (numer, denom) {
            (None, None) => return Err(ExpressionError::DegenerateRational),
            (Some(n), Some(d)) if n.symbol() == d.symbol() => {
                return Err(ExpressionError::EqualSymbols { symbol: n.symbol() });
            }
            _ => {}
        }
        Ok(Self {
            numer_factor,
            numer,
            denom_factor,
            denom,
        })
    }

    /// Returns the numerator factor `a`.
    pub fn numer_factor(&self) -> u64 {
        self.numer_factor
    }

    /// Returns the numerator symbol power, if any.
    pub fn numer(&self) -> Option<SymbolPower> {
        self.numer
    }

    /// Returns the denominator factor `b`.
    pub fn denom_factor(&self) -> u64 {
        self.denom_factor
    }

    /// Returns the denominator symbol power, if any.
    pub fn denom(&self) -> Option<SymbolPower> {
        self.denom
    }

    /// Evaluates the expression to a duration in years.
    pub fn value(&self) -> f64 {
        let numer = self.numer_factor as f64 * self.numer.map_or(1.0, SymbolPower::value);
        let denom = self.denom_factor as f64 * self.denom.map_or(1.0, SymbolPower::value);
        numer / denom
    }

    /// Renders the expression as LaTeX, e.g. `2 \pi` or
    /// `\frac{3 \pi^{3}}{2 e^{2}}`.
    pub fn latex(&self) -> String {
        let numer = latex_term(self.numer_factor, self.numer);
        if self.denom_factor == 1 && self.denom.is_none() {
            numer
        } else {
            let denom = latex_term(self.denom_factor, self.denom);
            format!(r"\frac{{{numer}}}{{{denom}}}")
        }
    }
}

fn plain_term(factor: u64, power: Option<SymbolPower>) -> String {
    match (factor, power) {
        (f, None) => f.to_string(),
        (1, Some(p)) => p.fmt_plain(),
        (f, Some(p)) => format!("{f}*{}", p.fmt_plain()),
    }
}

fn latex_term(factor: u64, power: Option<SymbolPower>) -> String {
    match (factor, power) {
        (f, None) => f.to_string(),
        (1, Some(p)) => p.fmt_latex(),
        (f, Some(p)) => format!("{f} {}", p.fmt_latex()),
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numer = plain_term(self.numer_factor, self.numer);
        if self.denom_factor == 1 && self.denom.is_none() {
            return f.write_str(&numer);
        }
        let denom = plain_term(self.denom_factor, self.denom);
        // parenthesize compound denominators like 2*e^2
        if self.denom_factor > 1 && self.denom.is_some() {
            write!(f, "{numer}/({denom})")
        } else {
            write!(f, "{numer}/{denom}")
        }
    }
}
