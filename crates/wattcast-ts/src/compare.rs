//! Multi-country CO2 forecast comparison.
//!
//! Every country shares the identical annual kWh series (the same energy
//! basis); only the intensity scalar differs. That shared series is
//! aggregated exactly once per comparison and reused for each country.

use std::collections::HashSet;

use wattcast_core::{AnnualSeries, Dataset, ForecastResult, WattcastResult};

use crate::aggregate::{aggregate_annual, derive_co2};
use crate::forecast::{forecast_with, ForecastBackend, ProphetBackend};

/// One country's comparison entry. A failed country (unknown code,
/// insufficient history) carries its error here instead of aborting the
/// other countries' forecasts.
#[derive(Debug)]
pub struct CountryForecast {
    pub country: String,
    pub outcome: WattcastResult<ForecastResult>,
}

/// Compare CO2 forecasts across `countries` with the default backend.
pub fn compare(
    dataset: &Dataset,
    countries: &[String],
    horizon_year: i32,
) -> Vec<CountryForecast> {
    compare_with(&ProphetBackend, dataset, countries, horizon_year)
}

/// Compare CO2 forecasts across `countries`.
///
/// Output order is the insertion order of `countries`; duplicates collapse
/// to the first occurrence. Failures are per-country.
pub fn compare_with(
    backend: &dyn ForecastBackend,
    dataset: &Dataset,
    countries: &[String],
    horizon_year: i32,
) -> Vec<CountryForecast> {
    let annual_kwh = aggregate_annual(dataset.energy(), None);

    let mut seen = HashSet::new();
    let mut results = Vec::with_capacity(countries.len());
    for country in countries {
        if !seen.insert(country.as_str()) {
            continue;
        }
        results.push(CountryForecast {
            country: country.clone(),
            outcome: forecast_country(backend, dataset, &annual_kwh, country, horizon_year),
        });
    }
    results
}

fn forecast_country(
    backend: &dyn ForecastBackend,
    dataset: &Dataset,
    annual_kwh: &AnnualSeries,
    country: &str,
    horizon_year: i32,
) -> WattcastResult<ForecastResult> {
    let intensity = dataset.intensity(country)?;
    let annual_co2 = derive_co2(annual_kwh, intensity)?;
    forecast_with(backend, &annual_co2, horizon_year)
}
