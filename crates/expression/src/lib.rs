//! # nerdyversary-expression
//!
//! Candidate expression construction: approximate a duration in years by a
//! rational multiple of a ratio of mathematical constants.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Symbol (pi, e, phi)"] -->|"SymbolPower::new()"| B["SymbolPower"]
//!     B -->|"Candidate::new()"| C["Candidate"]
//!     D["f64 ratio"] -->|"Fraction::from_decimal()"| E["Fraction a/b"]
//!     E -->|"factor check"| C
//!     F["ConstructConfig"] -->|"find_all() / find_first()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nerdyversary_expression::{ConstructConfig, DAYS_PER_YEAR, find_all};
//!
//! let config = ConstructConfig::new().with_max_power(3).with_factor_lim(5);
//!
//! // 2295 days is almost exactly 2*pi years.
//! let matches = find_all(2295.0 / DAYS_PER_YEAR, &config).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].to_string(), "2*pi");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `symbol` | Named mathematical constants |
//! | `fraction` | Reduced positive integer fractions |
//! | `candidate` | Canonical candidate expressions |
//! | `config` | Search tuning parameters |
//! | `construct` | The enumeration itself |
//! | `error` | Error types |

mod candidate;
mod config;
mod construct;
mod error;
mod fraction;
mod symbol;

pub use candidate::{Candidate, SymbolPower};
pub use config::ConstructConfig;
pub use construct::{find_all, find_first};
pub use error::ExpressionError;
pub use fraction::Fraction;
pub use symbol::{DEFAULT_SYMBOLS, Symbol};

/// Mean length of the Gregorian calendar year in days.
pub const DAYS_PER_YEAR: f64 = 365.2425;
