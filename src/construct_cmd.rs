//! Construct command: list expressions matching a single duration.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use nerdyversary_expression::{DAYS_PER_YEAR, find_all, find_first};

use crate::cli::ConstructArgs;
use crate::config::NerdyversaryConfig;
use crate::convert;
use crate::render;

/// Run the single-duration construction pipeline.
pub fn run(args: ConstructArgs) -> Result<()> {
    let _cmd = info_span!("construct").entered();

    // 1. Load project TOML
    let config: NerdyversaryConfig = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => NerdyversaryConfig::default(),
    };

    // 2. Resolve the target duration
    let duration_years = match (args.years, args.days) {
        (Some(years), None) => years,
        (None, Some(days)) => days as f64 / DAYS_PER_YEAR,
        (Some(_), Some(_)) => {
            bail!("duration must be given as exactly one of --years or --days, got both")
        }
        (None, None) => {
            bail!("duration must be given as exactly one of --years or --days, got neither")
        }
    };

    // 3. Build crate configs from TOML + CLI overrides
    let construct_cfg = convert::build_construct_config(
        &config.tuning,
        args.max_power,
        args.factor_lim,
        args.tolerance,
        args.symbols.as_deref(),
    )?;
    let format = convert::parse_format(args.format.as_deref().unwrap_or(&config.output.format))?;

    // 4. Search
    info!(duration_years, first = args.first, "constructing expressions");
    let expressions = if args.first {
        vec![find_first(duration_years, &construct_cfg)?]
    } else {
        find_all(duration_years, &construct_cfg).context("expression search failed")?
    };
    info!(n_expressions = expressions.len(), "construction complete");

    // 5. Render
    let rows: Vec<Vec<String>> = expressions.iter().map(render::expression_fields).collect();
    let table = render::render_table(&render::CONSTRUCT_HEADERS, &rows, format);
    println!("{table}");

    Ok(())
}
