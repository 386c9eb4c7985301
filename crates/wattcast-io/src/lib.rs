//! # wattcast-io: Input Table Loading & Result Export
//!
//! Loads the two CSV input tables into typed rows and exports computed
//! series and forecasts as CSV or JSON.
//!
//! ## Design Philosophy
//!
//! **Fail fast, name the table**: a malformed row (missing required
//! column, non-numeric year or kWh) aborts that load with a
//! [`wattcast_core::WattcastError::DataLoad`] naming the offending table,
//! rather than silently dropping rows.
//!
//! ## Expected schemas
//!
//! | Table | Required columns |
//! |-------|------------------|
//! | `models_energy` | `year, kwh, params_m, model` |
//! | `grid_intensity` | `country, gco2_per_kwh` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wattcast_io::importers::load_dataset;
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = load_dataset("data/models_energy.csv", "data/grid_intensity.csv")?;
//!     println!("{} training runs", dataset.energy().len());
//!     Ok(())
//! }
//! ```

pub mod export;
pub mod importers;

pub use export::{write_forecast_csv, write_json, write_series_csv};
pub use importers::{load_dataset, load_energy_csv, load_grid_csv};
