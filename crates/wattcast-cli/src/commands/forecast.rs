use anyhow::{Context, Result};
use tracing::info;

use wattcast_cli::cli::{ForecastCommands, OutputFormat};
use wattcast_cli::config::AppConfig;
use wattcast_core::ForecastResult;
use wattcast_io::{load_dataset, write_forecast_csv};
use wattcast_ts::{aggregate_annual, derive_co2, forecast};

use crate::commands::util::{emit_json, resolve_country, resolve_horizon};

pub fn handle(command: &ForecastCommands, config: &AppConfig) -> Result<()> {
    match command {
        ForecastCommands::Energy {
            models,
            grid,
            horizon_year,
            format,
            out,
        } => {
            let dataset = load_dataset(models, grid)?;
            let horizon = resolve_horizon(*horizon_year, config, &dataset)?;
            info!("Forecasting annual energy through {horizon}");
            let annual_kwh = aggregate_annual(dataset.energy(), None);
            let result = forecast(&annual_kwh, horizon)?;
            emit(&result, *format, out.as_deref())
        }
        ForecastCommands::Co2 {
            models,
            grid,
            country,
            horizon_year,
            format,
            out,
        } => {
            let dataset = load_dataset(models, grid)?;
            let country = resolve_country(country.as_ref(), config)?;
            let horizon = resolve_horizon(*horizon_year, config, &dataset)?;
            info!("Forecasting annual CO2 for {country} through {horizon}");
            let intensity = dataset.intensity(&country)?;
            let annual_kwh = aggregate_annual(dataset.energy(), None);
            let annual_co2 = derive_co2(&annual_kwh, intensity)?;
            let result = forecast(&annual_co2, horizon)?;
            emit(&result, *format, out.as_deref())
        }
    }
}

fn emit(result: &ForecastResult, format: OutputFormat, out: Option<&str>) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json(result, out),
        OutputFormat::Csv => {
            let path = out.context("--out is required for csv output")?;
            write_forecast_csv(path, result)?;
            println!("Wrote {path}");
            Ok(())
        }
    }
}
