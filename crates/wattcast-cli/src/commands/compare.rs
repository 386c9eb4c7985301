use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use wattcast_cli::config::AppConfig;
use wattcast_core::ForecastResult;
use wattcast_io::load_dataset;
use wattcast_ts::compare;

use crate::commands::util::{emit_json, resolve_countries, resolve_horizon};

/// JSON view of one country's comparison outcome.
#[derive(Serialize)]
struct CompareEntry<'a> {
    country: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    forecast: Option<&'a ForecastResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn handle(
    models: &str,
    grid: &str,
    countries: &[String],
    horizon_year: Option<i32>,
    out: Option<&str>,
    config: &AppConfig,
) -> Result<()> {
    let dataset = load_dataset(models, grid)?;
    let countries = resolve_countries(countries, config);
    let horizon = resolve_horizon(horizon_year, config, &dataset)?;

    let results = compare(&dataset, &countries, horizon);

    let entries: Vec<CompareEntry> = results
        .iter()
        .map(|entry| match &entry.outcome {
            Ok(result) => CompareEntry {
                country: &entry.country,
                forecast: Some(result),
                error: None,
            },
            Err(err) => {
                warn!("comparison for {} failed: {err}", entry.country);
                CompareEntry {
                    country: &entry.country,
                    forecast: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    emit_json(&entries, out)
}
