//! # nerdyversary-scan
//!
//! Date-range scanning: walk every day in a search window, measure its
//! distance to the special day, and collect the dates whose elapsed time
//! matches a candidate expression.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["SearchWindow"] -->|".resolve(today)"| B["[start, end) dates"]
//!     B -->|"day offsets"| C["durations in years"]
//!     C -->|"find_all()"| D["Candidate expressions"]
//!     D -->|"pair with date"| E["Nerdyversary hits"]
//!     E -->|"ordered dedup merge"| F["sorted Vec"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use nerdyversary_expression::ConstructConfig;
//! use nerdyversary_scan::{SearchWindow, scan};
//!
//! let special_day = NaiveDate::from_ymd_opt(2016, 3, 30).unwrap();
//! let window = SearchWindow::new(special_day)
//!     .with_start(NaiveDate::from_ymd_opt(2022, 7, 10).unwrap())
//!     .with_end(NaiveDate::from_ymd_opt(2022, 7, 20).unwrap());
//!
//! let config = ConstructConfig::new().with_max_power(3).with_factor_lim(5);
//! let today = special_day; // unused: the window is fully explicit
//! let hits = scan(&window, today, &config).unwrap();
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `window` | Search window with default resolution |
//! | `hit` | The (date, expression) match type |
//! | `scan` | The day loop |
//! | `error` | Error types |

mod error;
mod hit;
mod scan;
mod window;

pub use error::ScanError;
pub use hit::Nerdyversary;
pub use scan::scan;
pub use window::SearchWindow;
