//! The day loop: scan a window for nerdyversaries.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use tracing::debug;

use nerdyversary_expression::{ConstructConfig, DAYS_PER_YEAR, find_all};

use crate::error::ScanError;
use crate::hit::Nerdyversary;
use crate::window::SearchWindow;

/// Scans every day of the window for nerdyversaries.
///
/// The window resolves against the supplied `today` (see
/// [`SearchWindow::resolve`]). Each day offset in `[start, end)` relative
/// to the special day is converted to a duration in years and searched
/// with [`find_all`]; every hit is paired with its date. Days are
/// processed in parallel and merged through an ordered set, so the result
/// is deduplicated and sorted by `(date, expression)` regardless of
/// worker scheduling. Days before the special day carry no non-negative
/// duration and are skipped.
///
/// # Errors
///
/// Returns an error if the tuning configuration fails validation.
pub fn scan(
    window: &SearchWindow,
    today: NaiveDate,
    config: &ConstructConfig,
) -> Result<Vec<Nerdyversary>, ScanError> {
    // reject bad tuning before fanning out over the day range
    config.validate()?;

    let special_day = window.special_day();
    let (start, end) = window.resolve(today);
    let min_offset = (start - special_day).num_days();
    let max_offset = (end - special_day).num_days();
    debug!(%special_day, %start, %end, min_offset, max_offset, "scanning window");

    let per_day: Vec<Vec<Nerdyversary>> = (min_offset..max_offset)
        .into_par_iter()
        .map(|offset| scan_day(special_day, offset, config))
        .collect::<Result<_, _>>()?;

    let merged: BTreeSet<Nerdyversary> = per_day.into_iter().flatten().collect();
    debug!(n_hits = merged.len(), "scan complete");
    Ok(merged.into_iter().collect())
}

/// Searches a single day offset, returning all hits for that date.
fn scan_day(
    special_day: NaiveDate,
    offset: i64,
    config: &ConstructConfig,
) -> Result<Vec<Nerdyversary>, ScanError> {
    if offset < 0 {
        debug!(offset, "skipping day before the special day");
        return Ok(Vec::new());
    }

    let duration_years = offset as f64 / DAYS_PER_YEAR;
    let date = special_day + Duration::days(offset);
    let expressions = find_all(duration_years, config)?;
    Ok(expressions
        .into_iter()
        .map(|expression| Nerdyversary::new(date, expression))
        .collect())
}
