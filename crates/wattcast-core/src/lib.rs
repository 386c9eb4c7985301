//! # wattcast-core: Energy & Emissions Domain Core
//!
//! Provides the fundamental data structures for the wattcast pipeline:
//! input table rows, annual series, forecast results, unit newtypes, and
//! the unified error type.
//!
//! ## Design Philosophy
//!
//! Everything in this crate is an immutable **value object**: the loaded
//! tables live in a [`Dataset`] handle that is passed by reference through
//! the pipeline, and every derived series is recomputed per request from
//! its inputs. No caching, no shared mutable state.
//!
//! ## Quick Start
//!
//! ```rust
//! use wattcast_core::*;
//! use wattcast_core::units::{GramsPerKilowattHour, KilowattHours};
//!
//! let energy = vec![EnergyRecord {
//!     year: 2020,
//!     kwh: KilowattHours(1287000.0),
//!     params_m: 175000.0,
//!     model: "GPT-3".to_string(),
//! }];
//! let grid = vec![GridRecord {
//!     country: "US".to_string(),
//!     gco2_per_kwh: GramsPerKilowattHour(400.0),
//! }];
//!
//! let dataset = Dataset::new(energy, grid).unwrap();
//! let intensity = dataset.intensity("US").unwrap();
//! assert_eq!(intensity.value(), 400.0);
//! ```
//!
//! ## Modules
//!
//! - [`records`] - Input table row types
//! - [`series`] - Annual series and forecast value objects
//! - [`units`] - `#[repr(transparent)]` unit newtypes
//! - [`error`] - Unified [`WattcastError`] / [`WattcastResult`]
//! - [`dataset`] - The immutable [`Dataset`] handle
//!
//! ## Integration with wattcast-io
//!
//! The wattcast-io crate loads the two CSV tables and assembles a
//! [`Dataset`]; wattcast-ts consumes it for aggregation, CO2 derivation,
//! and forecasting.

pub mod dataset;
pub mod error;
pub mod records;
pub mod series;
pub mod units;

pub use dataset::Dataset;
pub use error::{WattcastError, WattcastResult};
pub use records::{EnergyRecord, GridRecord, ENERGY_TABLE, GRID_TABLE};
pub use series::{AnnualPoint, AnnualSeries, ForecastPoint, ForecastResult};
