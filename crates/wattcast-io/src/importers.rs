//! CSV importers for the two input tables.

use std::path::Path;

use csv::ReaderBuilder;
use wattcast_core::{
    Dataset, EnergyRecord, GridRecord, WattcastError, WattcastResult, ENERGY_TABLE, GRID_TABLE,
};

/// Load the model-energy table (`year, kwh, params_m, model`).
pub fn load_energy_csv(path: impl AsRef<Path>) -> WattcastResult<Vec<EnergyRecord>> {
    read_table(path.as_ref(), ENERGY_TABLE, &["year", "kwh", "params_m", "model"])
}

/// Load the grid-intensity table (`country, gco2_per_kwh`).
pub fn load_grid_csv(path: impl AsRef<Path>) -> WattcastResult<Vec<GridRecord>> {
    read_table(path.as_ref(), GRID_TABLE, &["country", "gco2_per_kwh"])
}

/// Load both tables and assemble the immutable [`Dataset`] handle.
///
/// Duplicate country codes in the grid table are rejected by
/// [`Dataset::new`].
pub fn load_dataset(
    energy_path: impl AsRef<Path>,
    grid_path: impl AsRef<Path>,
) -> WattcastResult<Dataset> {
    let energy = load_energy_csv(energy_path)?;
    let grid = load_grid_csv(grid_path)?;
    Dataset::new(energy, grid)
}

fn read_table<T: serde::de::DeserializeOwned>(
    path: &Path,
    table: &str,
    required: &[&str],
) -> WattcastResult<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| {
            WattcastError::data_load(table, format!("opening {}: {err}", path.display()))
        })?;

    check_headers(&mut reader, table, required)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        // Header row is line 1, so the first record is line 2.
        let row: T = result.map_err(|err| {
            WattcastError::data_load(table, format!("row {}: {err}", idx + 2))
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn check_headers(
    reader: &mut csv::Reader<std::fs::File>,
    table: &str,
    required: &[&str],
) -> WattcastResult<()> {
    let headers = reader
        .headers()
        .map_err(|err| WattcastError::data_load(table, format!("reading header: {err}")))?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(WattcastError::data_load(
                table,
                format!("missing required column '{column}'"),
            ));
        }
    }
    Ok(())
}
