//! # wattcast-ts: Aggregation & Forecast Pipeline
//!
//! The computational core: annual aggregation of training-run energy,
//! CO2 derivation under a grid intensity factor, additive time-series
//! forecasting to a horizon year, and multi-country comparison.
//!
//! Each operation is a pure function of its inputs; a request-scoped
//! pipeline looks like:
//!
//! ```rust
//! use wattcast_core::units::GramsPerKilowattHour;
//! use wattcast_ts::{aggregate_annual, derive_co2};
//! # use wattcast_core::units::KilowattHours;
//! # use wattcast_core::EnergyRecord;
//!
//! # let records = vec![EnergyRecord {
//! #     year: 2020,
//! #     kwh: KilowattHours(100.0),
//! #     params_m: 1.0,
//! #     model: "m".into(),
//! # }];
//! let annual_kwh = aggregate_annual(&records, None);
//! let annual_co2 = derive_co2(&annual_kwh, GramsPerKilowattHour(400.0)).unwrap();
//! assert_eq!(annual_co2.value_at(2020), Some(40.0));
//! ```
//!
//! Forecasting (`forecast`, `compare`) goes through the [`ForecastBackend`]
//! seam; the production backend is Prophet via `augurs`.

pub mod aggregate;
pub mod compare;
pub mod forecast;
pub mod kpi;

pub use aggregate::{aggregate_annual, derive_co2};
pub use compare::{compare, compare_with, CountryForecast};
pub use forecast::{
    forecast, forecast_with, BandedEstimate, ForecastBackend, ProphetBackend,
    DEFAULT_HORIZON_YEAR,
};
pub use kpi::{kpi_summary, KpiSummary};
