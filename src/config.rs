use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level nerdyversary configuration.
///
/// All tables and fields are optional; dates are quoted ISO strings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NerdyversaryConfig {
    /// Search window settings.
    #[serde(default)]
    pub search: SearchToml,

    /// Expression tuning settings.
    #[serde(default)]
    pub tuning: TuningToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    /// Date of the special day.
    pub special_day: Option<NaiveDate>,
    /// First day of the search range.
    pub start: Option<NaiveDate>,
    /// Day the search range ends on (exclusive).
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuningToml {
    #[serde(default = "default_max_power")]
    pub max_power: u32,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_factor_lim")]
    pub factor_lim: u64,
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
}

impl Default for TuningToml {
    fn default() -> Self {
        Self {
            max_power: default_max_power(),
            tolerance: default_tolerance(),
            factor_lim: default_factor_lim(),
            symbols: default_symbols(),
        }
    }
}

fn default_max_power() -> u32 {
    5
}
fn default_tolerance() -> f64 {
    0.5
}
fn default_factor_lim() -> u64 {
    10
}
fn default_symbols() -> Vec<String> {
    vec!["pi".to_string(), "e".to_string(), "phi".to_string()]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "simple".to_string()
}
