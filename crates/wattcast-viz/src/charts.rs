use serde::Serialize;

use wattcast_core::units::GramsPerKilowattHour;
use wattcast_core::{EnergyRecord, ForecastResult, WattcastError, WattcastResult};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartPoint {
    pub year: i32,
    pub value: f64,
}

/// Single-series forecast chart: observed markers, estimate line and the
/// confidence band, all on a shared year axis.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastChart {
    pub title: String,
    pub value_label: String,
    pub observed: Vec<ChartPoint>,
    pub estimate: Vec<ChartPoint>,
    pub lower: Vec<ChartPoint>,
    pub upper: Vec<ChartPoint>,
}

/// Build the forecast chart payload for one series.
pub fn forecast_chart(title: &str, value_label: &str, result: &ForecastResult) -> ForecastChart {
    ForecastChart {
        title: title.to_string(),
        value_label: value_label.to_string(),
        observed: result
            .history
            .iter()
            .map(|p| ChartPoint {
                year: p.year,
                value: p.value,
            })
            .collect(),
        estimate: result
            .projection
            .iter()
            .map(|p| ChartPoint {
                year: p.year,
                value: p.estimate,
            })
            .collect(),
        lower: result
            .projection
            .iter()
            .map(|p| ChartPoint {
                year: p.year,
                value: p.lower,
            })
            .collect(),
        upper: result
            .projection
            .iter()
            .map(|p| ChartPoint {
                year: p.year,
                value: p.upper,
            })
            .collect(),
    }
}

/// One bubble of the emissions-vs-model-size scatter.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub model: String,
    pub params_m: f64,
    pub co2_kg: f64,
    /// Point size encoding.
    pub kwh: f64,
}

/// Emissions vs. parameter count, one bubble per training run.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterChart {
    pub title: String,
    /// Parameter counts span orders of magnitude; render the x axis in
    /// log scale.
    pub log_x: bool,
    pub points: Vec<ScatterPoint>,
}

/// Build the scatter payload for runs up to `cutoff_year` under the given
/// grid intensity.
pub fn co2_scatter(
    title: &str,
    records: &[EnergyRecord],
    intensity: GramsPerKilowattHour,
    cutoff_year: Option<i32>,
) -> WattcastResult<ScatterChart> {
    if !intensity.is_valid() {
        return Err(WattcastError::InvalidIntensity(intensity.value()));
    }
    let points = records
        .iter()
        .filter(|r| cutoff_year.map_or(true, |cutoff| r.year <= cutoff))
        .map(|r| ScatterPoint {
            model: r.model.clone(),
            params_m: r.params_m,
            co2_kg: r.kwh.emissions_at(intensity).value(),
            kwh: r.kwh.value(),
        })
        .collect();
    Ok(ScatterChart {
        title: title.to_string(),
        log_x: true,
        points,
    })
}

/// One country's traces in the comparison overlay.
#[derive(Debug, Clone, Serialize)]
pub struct OverlaySeries {
    pub country: String,
    pub estimate: Vec<ChartPoint>,
    pub observed: Vec<ChartPoint>,
}

/// A country excluded from the overlay, with the reason shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedCountry {
    pub country: String,
    pub reason: String,
}

/// Multi-country forecast overlay: same energy basis, differing grid mix.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OverlayChart {
    pub title: String,
    pub series: Vec<OverlaySeries>,
    pub skipped: Vec<SkippedCountry>,
}

/// Build the overlay payload. Countries whose forecast failed are listed
/// under `skipped` so the rest of the chart still renders.
pub fn overlay_chart(
    title: &str,
    entries: &[(&str, &ForecastResult)],
    skipped: &[(&str, String)],
) -> OverlayChart {
    OverlayChart {
        title: title.to_string(),
        series: entries
            .iter()
            .map(|(country, result)| OverlaySeries {
                country: country.to_string(),
                estimate: result
                    .projection
                    .iter()
                    .map(|p| ChartPoint {
                        year: p.year,
                        value: p.estimate,
                    })
                    .collect(),
                observed: result
                    .history
                    .iter()
                    .map(|p| ChartPoint {
                        year: p.year,
                        value: p.value,
                    })
                    .collect(),
            })
            .collect(),
        skipped: skipped
            .iter()
            .map(|(country, reason)| SkippedCountry {
                country: country.to_string(),
                reason: reason.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wattcast_core::units::KilowattHours;
    use wattcast_core::{AnnualPoint, AnnualSeries, ForecastPoint};

    fn result() -> ForecastResult {
        ForecastResult {
            history: AnnualSeries::new(vec![
                AnnualPoint {
                    year: 2020,
                    value: 40.0,
                },
                AnnualPoint {
                    year: 2021,
                    value: 80.0,
                },
            ]),
            projection: (2020..=2023)
                .map(|year| ForecastPoint {
                    year,
                    estimate: 50.0,
                    lower: 40.0,
                    upper: 60.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_forecast_chart_traces_align() {
        let chart = forecast_chart("Energy forecast", "kWh", &result());
        assert_eq!(chart.observed.len(), 2);
        assert_eq!(chart.estimate.len(), 4);
        assert_eq!(chart.lower.len(), chart.upper.len());
        assert_eq!(chart.estimate[0].year, 2020);
    }

    #[test]
    fn test_scatter_filters_by_cutoff() {
        let records = vec![
            EnergyRecord {
                year: 2020,
                kwh: KilowattHours(100.0),
                params_m: 175000.0,
                model: "GPT-3".into(),
            },
            EnergyRecord {
                year: 2022,
                kwh: KilowattHours(300.0),
                params_m: 540000.0,
                model: "PaLM".into(),
            },
        ];
        let chart = co2_scatter(
            "CO2 vs size",
            &records,
            GramsPerKilowattHour(400.0),
            Some(2021),
        )
        .unwrap();
        assert!(chart.log_x);
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].model, "GPT-3");
        assert!((chart.points[0].co2_kg - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_scatter_rejects_negative_intensity() {
        let chart = co2_scatter("x", &[], GramsPerKilowattHour(-1.0), None);
        assert!(chart.is_err());
    }

    #[test]
    fn test_overlay_collects_series_and_skips() {
        let us = result();
        let chart = overlay_chart(
            "CO2 by country",
            &[("US", &us)],
            &[("ZZ", "unknown country 'ZZ'".to_string())],
        );
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].country, "US");
        assert_eq!(chart.skipped[0].country, "ZZ");
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"skipped\""));
    }
}
