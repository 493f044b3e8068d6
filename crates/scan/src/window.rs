//! Search window with default resolution.

use chrono::{Duration, NaiveDate};

/// Length of the default search window in days.
const DEFAULT_WINDOW_DAYS: i64 = 365;

/// A search window anchored on a special day.
///
/// Start and end are optional; [`SearchWindow::resolve`] fills them in
/// from an explicitly supplied `today`, so the caller owns the clock and
/// the core stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    special_day: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl SearchWindow {
    /// Creates a window anchored on `special_day` with no explicit bounds.
    pub fn new(special_day: NaiveDate) -> Self {
        Self {
            special_day,
            start: None,
            end: None,
        }
    }

    /// Sets the first day of the search range.
    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the day the search range ends on (exclusive).
    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns the special day.
    pub fn special_day(&self) -> NaiveDate {
        self.special_day
    }

    /// Resolves the concrete half-open `[start, end)` range.
    ///
    /// A missing start defaults to `today`; a missing end defaults to the
    /// resolved start plus 365 days.
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = self.start.unwrap_or(today);
        let end = self
            .end
            .unwrap_or(start + Duration::days(DEFAULT_WINDOW_DAYS));
        (start, end)
    }
}
