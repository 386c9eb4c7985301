//! Export helpers for computed series and forecast tables.

use std::fs::{self, File};
use std::path::Path;

use serde::Serialize;
use wattcast_core::{AnnualSeries, ForecastResult, WattcastResult};

/// Write an annual series as CSV with columns `year,<value_column>`.
pub fn write_series_csv(
    path: impl AsRef<Path>,
    series: &AnnualSeries,
    value_column: &str,
) -> WattcastResult<()> {
    let file = create_with_parents(path.as_ref())?;
    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(["year", value_column])
        .map_err(to_io_like)?;
    for point in series {
        writer
            .write_record([point.year.to_string(), format_value(point.value)])
            .map_err(to_io_like)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a forecast projection as CSV with columns
/// `year,estimate,lower,upper`.
pub fn write_forecast_csv(path: impl AsRef<Path>, result: &ForecastResult) -> WattcastResult<()> {
    let file = create_with_parents(path.as_ref())?;
    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(["year", "estimate", "lower", "upper"])
        .map_err(to_io_like)?;
    for point in &result.projection {
        writer
            .write_record([
                point.year.to_string(),
                format_value(point.estimate),
                format_value(point.lower),
                format_value(point.upper),
            ])
            .map_err(to_io_like)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize any payload as pretty JSON to `path`.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, payload: &T) -> WattcastResult<()> {
    let file = create_with_parents(path.as_ref())?;
    serde_json::to_writer_pretty(file, payload)
        .map_err(|err| wattcast_core::WattcastError::Other(format!("serializing JSON: {err}")))?;
    Ok(())
}

fn create_with_parents(path: &Path) -> WattcastResult<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}

fn format_value(value: f64) -> String {
    // Trailing-zero-free but round-trippable output for small tables.
    format!("{value}")
}

fn to_io_like(err: csv::Error) -> wattcast_core::WattcastError {
    wattcast_core::WattcastError::Other(format!("writing CSV: {err}"))
}
