//! Search command: scan a date window for nerdyversaries.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use nerdyversary_scan::scan;

use crate::cli::SearchArgs;
use crate::config::NerdyversaryConfig;
use crate::convert;
use crate::render;

/// Run the window scan pipeline.
pub fn run(args: SearchArgs) -> Result<()> {
    let _cmd = info_span!("search").entered();

    // 1. Load project TOML
    let config: NerdyversaryConfig = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => NerdyversaryConfig::default(),
    };

    // 2. Build crate configs from TOML + CLI overrides
    let construct_cfg = convert::build_construct_config(
        &config.tuning,
        args.max_power,
        args.factor_lim,
        args.tolerance,
        args.symbols.as_deref(),
    )?;
    let window = convert::build_window(&args, &config)?;
    let format = convert::parse_format(args.format.as_deref().unwrap_or(&config.output.format))?;

    // 3. Scan; the clock is read once, here, and injected into the core
    let today = Local::now().date_naive();
    info!(
        special_day = %window.special_day(),
        %today,
        "scanning for nerdyversaries"
    );
    let hits = scan(&window, today, &construct_cfg).context("window scan failed")?;
    info!(n_hits = hits.len(), "scan complete");

    // 4. Render
    let rows: Vec<Vec<String>> = hits.iter().map(render::hit_fields).collect();
    let table = render::render_table(&render::SEARCH_HEADERS, &rows, format);
    println!("{table}");

    Ok(())
}
