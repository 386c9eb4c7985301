//! Annual aggregation and CO2 derivation.

use std::collections::BTreeMap;

use wattcast_core::units::GramsPerKilowattHour;
use wattcast_core::{AnnualPoint, AnnualSeries, EnergyRecord, WattcastError, WattcastResult};

/// Group training runs by year and sum their energy usage.
///
/// With a cutoff, rows from later years are excluded. Years with no rows
/// are absent from the output; downstream consumers must tolerate gaps.
/// An input that is empty after filtering yields an empty series.
pub fn aggregate_annual(records: &[EnergyRecord], cutoff_year: Option<i32>) -> AnnualSeries {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for record in records {
        if let Some(cutoff) = cutoff_year {
            if record.year > cutoff {
                continue;
            }
        }
        *totals.entry(record.year).or_insert(0.0) += record.kwh.value();
    }

    AnnualSeries::new(
        totals
            .into_iter()
            .map(|(year, value)| AnnualPoint { year, value })
            .collect(),
    )
}

/// Map an annual kWh series to kg CO2 under the given grid intensity.
///
/// Pure, stateless transform: kg = kWh x gCO2/kWh / 1000, same years in
/// the same order. The caller is responsible for resolving the country to
/// a scalar; a negative factor indicates an upstream data problem.
pub fn derive_co2(
    series: &AnnualSeries,
    intensity: GramsPerKilowattHour,
) -> WattcastResult<AnnualSeries> {
    if !intensity.is_valid() {
        return Err(WattcastError::InvalidIntensity(intensity.value()));
    }
    Ok(series.scaled(intensity.value() / 1000.0))
}
