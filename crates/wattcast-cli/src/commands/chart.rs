use anyhow::Result;
use tracing::info;

use wattcast_cli::cli::{ChartCommands, ChartSeries};
use wattcast_cli::config::AppConfig;
use wattcast_io::load_dataset;
use wattcast_ts::{aggregate_annual, compare, derive_co2, forecast};
use wattcast_viz::{co2_scatter, forecast_chart, overlay_chart};

use crate::commands::util::{emit_json, resolve_countries, resolve_country, resolve_horizon};

pub fn handle(command: &ChartCommands, config: &AppConfig) -> Result<()> {
    match command {
        ChartCommands::Forecast {
            models,
            grid,
            series,
            country,
            horizon_year,
            out,
        } => {
            let dataset = load_dataset(models, grid)?;
            let horizon = resolve_horizon(*horizon_year, config, &dataset)?;
            let annual_kwh = aggregate_annual(dataset.energy(), None);
            let chart = match series {
                ChartSeries::Energy => {
                    info!("Building energy forecast chart through {horizon}");
                    let result = forecast(&annual_kwh, horizon)?;
                    forecast_chart(
                        &format!("Annual training energy forecast to {horizon}"),
                        "kWh",
                        &result,
                    )
                }
                ChartSeries::Co2 => {
                    let country = resolve_country(country.as_ref(), config)?;
                    info!("Building CO2 forecast chart for {country} through {horizon}");
                    let intensity = dataset.intensity(&country)?;
                    let annual_co2 = derive_co2(&annual_kwh, intensity)?;
                    let result = forecast(&annual_co2, horizon)?;
                    forecast_chart(
                        &format!("Annual CO2 forecast to {horizon} ({country})"),
                        "kg CO2",
                        &result,
                    )
                }
            };
            emit_json(&chart, out.as_deref())
        }
        ChartCommands::Scatter {
            models,
            grid,
            country,
            until,
            out,
        } => {
            let dataset = load_dataset(models, grid)?;
            let country = resolve_country(country.as_ref(), config)?;
            let intensity = dataset.intensity(&country)?;
            let chart = co2_scatter(
                &format!("CO2 vs. model size ({country})"),
                dataset.energy(),
                intensity,
                *until,
            )?;
            emit_json(&chart, out.as_deref())
        }
        ChartCommands::Overlay {
            models,
            grid,
            countries,
            horizon_year,
            out,
        } => {
            let dataset = load_dataset(models, grid)?;
            let countries = resolve_countries(countries, config);
            let horizon = resolve_horizon(*horizon_year, config, &dataset)?;
            let results = compare(&dataset, &countries, horizon);

            let mut entries = Vec::new();
            let mut skipped = Vec::new();
            for entry in &results {
                match &entry.outcome {
                    Ok(result) => entries.push((entry.country.as_str(), result)),
                    Err(err) => skipped.push((entry.country.as_str(), err.to_string())),
                }
            }
            let chart = overlay_chart(
                &format!("CO2 forecast by country to {horizon} (shared kWh basis)"),
                &entries,
                &skipped,
            );
            emit_json(&chart, out.as_deref())
        }
    }
}
