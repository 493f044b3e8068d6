//! The expression constructor: enumerate candidate approximations of a
//! duration.

use std::collections::BTreeSet;

use tracing::trace;

use crate::DAYS_PER_YEAR;
use crate::candidate::{Candidate, SymbolPower};
use crate::config::ConstructConfig;
use crate::error::ExpressionError;
use crate::fraction::Fraction;

/// Finds every candidate expression approximating `duration_years` within
/// the configured tolerance.
///
/// The result is deduplicated and sorted by canonical candidate order; an
/// empty `Vec` means no candidate matched. Repeated calls with identical
/// inputs produce identical output.
///
/// # Errors
///
/// Returns an error if the configuration fails validation or the duration
/// is not finite or negative.
///
/// # Example
///
/// ```
/// use nerdyversary_expression::{ConstructConfig, find_all};
///
/// // 2*pi/e years, within a hair
/// let matches = find_all(2.311_444, &ConstructConfig::new()).unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].to_string(), "2*pi/e");
/// ```
pub fn find_all(
    duration_years: f64,
    config: &ConstructConfig,
) -> Result<Vec<Candidate>, ExpressionError> {
    config.validate()?;
    validate_duration(duration_years)?;

    let mut matches = BTreeSet::new();
    for_each_match(duration_years, config, |candidate| {
        matches.insert(candidate);
        false
    });
    Ok(matches.into_iter().collect())
}

/// Finds the first candidate expression approximating `duration_years`
/// within the configured tolerance.
///
/// "First" refers to the deterministic enumeration order: outer exponent
/// ascending, inner exponent ascending, then symbol pairs in configured
/// order. This is not necessarily the smallest candidate in canonical
/// order.
///
/// # Errors
///
/// Returns [`ExpressionError::NoMatch`] when the enumeration is exhausted
/// without a hit, and the same validation errors as [`find_all`].
pub fn find_first(
    duration_years: f64,
    config: &ConstructConfig,
) -> Result<Candidate, ExpressionError> {
    config.validate()?;
    validate_duration(duration_years)?;

    let mut found = None;
    for_each_match(duration_years, config, |candidate| {
        found = Some(candidate);
        true
    });
    found.ok_or(ExpressionError::NoMatch {
        duration: duration_years,
    })
}

fn validate_duration(duration_years: f64) -> Result<(), ExpressionError> {
    if !duration_years.is_finite() || duration_years < 0.0 {
        return Err(ExpressionError::InvalidDuration {
            duration: duration_years,
        });
    }
    Ok(())
}

/// Runs `on_match` for every in-tolerance candidate, in enumeration order.
/// Stops early when `on_match` returns `true`.
fn for_each_match(
    duration_years: f64,
    config: &ConstructConfig,
    mut on_match: impl FnMut(Candidate) -> bool,
) {
    for numer_pow in 0..=config.max_power() {
        for denom_pow in 0..=config.max_power() {
            // both exponents zero would make the candidate a plain fraction
            if numer_pow == 0 && denom_pow == 0 {
                continue;
            }
            for &numer_sym in config.symbols() {
                for &denom_sym in config.symbols() {
                    if numer_sym == denom_sym {
                        continue;
                    }

                    let numer_val = numer_sym.value().powi(numer_pow as i32);
                    let denom_val = denom_sym.value().powi(denom_pow as i32);
                    let ratio = duration_years * denom_val / numer_val;

                    let Some(fraction) = Fraction::from_decimal(ratio) else {
                        continue;
                    };
                    if fraction.numer() > config.factor_lim()
                        || fraction.denom() > config.factor_lim()
                    {
                        continue;
                    }

                    let numer = (numer_pow > 0).then(|| {
                        SymbolPower::new(numer_sym, numer_pow).expect("exponent checked nonzero")
                    });
                    let denom = (denom_pow > 0).then(|| {
                        SymbolPower::new(denom_sym, denom_pow).expect("exponent checked nonzero")
                    });
                    let candidate =
                        Candidate::new(fraction.numer(), numer, fraction.denom(), denom)
                            .expect("loop guards keep symbols distinct and one power nonzero");

                    let difference = (duration_years - candidate.value()).abs();
                    if difference * DAYS_PER_YEAR < config.tolerance_days() {
                        trace!(%candidate, ratio, "candidate within tolerance");
                        if on_match(candidate) {
                            return;
                        }
                    }
                }
            }
        }
    }
}
