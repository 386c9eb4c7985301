//! Headline totals for a selected country and cutoff year.

use serde::Serialize;

use wattcast_core::units::{KilogramsCo2, KilowattHours};
use wattcast_core::{Dataset, WattcastResult};

use crate::aggregate::{aggregate_annual, derive_co2};

/// Total energy and total emissions for the dashboard's KPI tiles.
#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    pub country: String,
    pub cutoff_year: Option<i32>,
    pub training_runs: usize,
    pub total_kwh: KilowattHours,
    pub total_co2_kg: KilogramsCo2,
}

/// Compute the KPI totals from one annual aggregation pass.
pub fn kpi_summary(
    dataset: &Dataset,
    country: &str,
    cutoff_year: Option<i32>,
) -> WattcastResult<KpiSummary> {
    let intensity = dataset.intensity(country)?;
    let annual_kwh = aggregate_annual(dataset.energy(), cutoff_year);
    let annual_co2 = derive_co2(&annual_kwh, intensity)?;

    let training_runs = dataset
        .energy()
        .iter()
        .filter(|r| cutoff_year.map_or(true, |cutoff| r.year <= cutoff))
        .count();

    Ok(KpiSummary {
        country: country.to_string(),
        cutoff_year,
        training_runs,
        total_kwh: KilowattHours(annual_kwh.total()),
        total_co2_kg: KilogramsCo2(annual_co2.total()),
    })
}
