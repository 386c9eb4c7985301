use std::io;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use wattcast_cli::config::AppConfig;
use wattcast_core::Dataset;

/// Write `payload` as pretty JSON to `out`, or to stdout.
pub fn emit_json<T: Serialize>(payload: &T, out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => {
            wattcast_io::write_json(path, payload)?;
            println!("Wrote {path}");
        }
        None => {
            serde_json::to_writer_pretty(io::stdout(), payload)
                .map_err(|err| anyhow::anyhow!("serializing to JSON: {err}"))?;
            println!();
        }
    }
    Ok(())
}

/// Country from the flag, or the config default, or an error.
pub fn resolve_country(flag: Option<&String>, config: &AppConfig) -> Result<String> {
    flag.cloned()
        .or_else(|| config.default_country.clone())
        .context("no country selected; pass --country or set default_country in wattcast.toml")
}

/// Horizon from the flag or the config, checked against the dataset.
pub fn resolve_horizon(flag: Option<i32>, config: &AppConfig, dataset: &Dataset) -> Result<i32> {
    let horizon = flag.unwrap_or(config.horizon_year);
    if let Some((min_year, _)) = dataset.year_range() {
        if horizon < min_year {
            bail!("horizon_year {horizon} is before the first observed year {min_year}");
        }
    }
    Ok(horizon)
}

/// Comparison set from the flag, or the config default.
pub fn resolve_countries(flag: &[String], config: &AppConfig) -> Vec<String> {
    if flag.is_empty() {
        config.compare_countries.clone()
    } else {
        flag.to_vec()
    }
}
