//! Pure conversion functions: CLI + TOML values -> crate API config types.

use anyhow::{Result, bail};

use nerdyversary_expression::{ConstructConfig, Symbol};
use nerdyversary_scan::SearchWindow;

use crate::cli::SearchArgs;
use crate::config::{NerdyversaryConfig, TuningToml};
use crate::render::TableFormat;

/// Parses a symbol name string into the corresponding enum variant.
pub fn parse_symbol(s: &str) -> Result<Symbol> {
    match s.trim().to_lowercase().as_str() {
        "pi" | "π" => Ok(Symbol::Pi),
        "e" => Ok(Symbol::E),
        "phi" | "golden" | "φ" => Ok(Symbol::GoldenRatio),
        other => bail!("unknown symbol: {other:?}"),
    }
}

/// Parses a table format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<TableFormat> {
    match s.to_lowercase().as_str() {
        "simple" => Ok(TableFormat::Simple),
        "github" => Ok(TableFormat::Github),
        "csv" => Ok(TableFormat::Csv),
        other => bail!("unknown table format: {other:?}"),
    }
}

/// Builds a [`ConstructConfig`] from the TOML tuning table with CLI
/// overrides applied on top.
pub fn build_construct_config(
    tuning: &TuningToml,
    max_power: Option<u32>,
    factor_lim: Option<u64>,
    tolerance: Option<f64>,
    symbols: Option<&[String]>,
) -> Result<ConstructConfig> {
    let names = symbols.unwrap_or(&tuning.symbols);
    let symbols = names
        .iter()
        .map(|name| parse_symbol(name))
        .collect::<Result<Vec<_>>>()?;

    let config = ConstructConfig::new()
        .with_max_power(max_power.unwrap_or(tuning.max_power))
        .with_factor_lim(factor_lim.unwrap_or(tuning.factor_lim))
        .with_tolerance_days(tolerance.unwrap_or(tuning.tolerance))
        .with_symbols(symbols);
    config.validate()?;
    Ok(config)
}

/// Builds a [`SearchWindow`] from CLI arguments with the TOML search table
/// as fallback.
pub fn build_window(args: &SearchArgs, config: &NerdyversaryConfig) -> Result<SearchWindow> {
    let special_day = args
        .special_day
        .or(config.search.special_day)
        .ok_or_else(|| {
            anyhow::anyhow!("no special day: set [search].special_day in config or use --special-day")
        })?;

    let mut window = SearchWindow::new(special_day);
    if let Some(start) = args.start.or(config.search.start) {
        window = window.with_start(start);
    }
    if let Some(end) = args.end.or(config.search.end) {
        window = window.with_end(end);
    }
    Ok(window)
}
