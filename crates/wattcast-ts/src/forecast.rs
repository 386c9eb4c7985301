//! Forecast wrapper over an additive time-series model.
//!
//! The forecasting library is an opaque capability behind the
//! [`ForecastBackend`] trait: fit on observed (timestamp, value) pairs,
//! predict a banded estimate for every requested timestamp. The production
//! backend is the Prophet implementation from `augurs`, the same additive
//! trend-plus-seasonality model family as the reference pipeline. Exact
//! numeric outputs depend on the library version and are never part of
//! this crate's contract; only the structural guarantees below are.
//!
//! Guarantees of [`forecast_with`]:
//! - one projection entry per integer year from the first observed year
//!   through `max(horizon_year, last_observed_year)`, gap-free;
//! - `lower <= estimate <= upper` for every entry;
//! - the input series is returned unchanged as `history`.

use augurs::prophet::{wasmstan::WasmstanOptimizer, PredictionData, Prophet, TrainingData};
use chrono::{TimeZone, Utc};

use wattcast_core::{
    AnnualSeries, ForecastPoint, ForecastResult, WattcastError, WattcastResult,
};

/// Horizon used when the caller does not configure one.
pub const DEFAULT_HORIZON_YEAR: i32 = 2030;

/// A point estimate with its uncertainty band, as returned by a backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandedEstimate {
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Opaque fitting/prediction capability of a time-series library.
///
/// Implementations must be deterministic for a fixed input and library
/// version, and must return exactly one estimate per requested timestamp,
/// in request order.
pub trait ForecastBackend {
    fn fit_predict(
        &self,
        observed: &[(i64, f64)],
        requested: &[i64],
    ) -> WattcastResult<Vec<BandedEstimate>>;
}

/// Forecast with the default Prophet backend.
pub fn forecast(series: &AnnualSeries, horizon_year: i32) -> WattcastResult<ForecastResult> {
    forecast_with(&ProphetBackend, series, horizon_year)
}

/// Fit `series` and project every year through the horizon.
///
/// Each year is anchored at January 1 UTC; the same anchoring is used for
/// fitting and prediction. Requesting predictions for the full
/// `[first_observed, max(horizon, last_observed)]` range covers in-history
/// gap years and makes a horizon at or before the last observation a plain
/// in-sample request rather than an error.
pub fn forecast_with(
    backend: &dyn ForecastBackend,
    series: &AnnualSeries,
    horizon_year: i32,
) -> WattcastResult<ForecastResult> {
    let (first, last) = match (series.first_year(), series.last_year()) {
        (Some(first), Some(last)) if series.len() >= 2 => (first, last),
        _ => {
            return Err(WattcastError::InsufficientHistory {
                distinct_years: series.len(),
            })
        }
    };

    let observed = series
        .iter()
        .map(|p| Ok((year_timestamp(p.year)?, p.value)))
        .collect::<WattcastResult<Vec<_>>>()?;

    let years: Vec<i32> = (first..=horizon_year.max(last)).collect();
    let requested = years
        .iter()
        .map(|&year| year_timestamp(year))
        .collect::<WattcastResult<Vec<_>>>()?;

    let bands = backend.fit_predict(&observed, &requested)?;
    if bands.len() != requested.len() {
        return Err(WattcastError::Forecast(format!(
            "backend returned {} predictions for {} requested years",
            bands.len(),
            requested.len()
        )));
    }

    let projection = years
        .iter()
        .zip(bands)
        .map(|(&year, band)| {
            // A sampled band can cross its own point estimate; normalize so
            // lower <= estimate <= upper always holds.
            ForecastPoint {
                year,
                estimate: band.estimate,
                lower: band.lower.min(band.estimate),
                upper: band.upper.max(band.estimate),
            }
        })
        .collect();

    Ok(ForecastResult {
        history: series.clone(),
        projection,
    })
}

/// January 1 of `year`, midnight UTC, as a unix timestamp in seconds.
fn year_timestamp(year: i32) -> WattcastResult<i64> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| {
            WattcastError::Forecast(format!("year {year} is outside the representable range"))
        })
}

/// Additive regression forecaster from `augurs` (Prophet fit with the
/// bundled WASM Stan optimizer).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProphetBackend;

impl ForecastBackend for ProphetBackend {
    fn fit_predict(
        &self,
        observed: &[(i64, f64)],
        requested: &[i64],
    ) -> WattcastResult<Vec<BandedEstimate>> {
        let ds: Vec<i64> = observed.iter().map(|&(ts, _)| ts).collect();
        let y: Vec<f64> = observed.iter().map(|&(_, value)| value).collect();
        let data = TrainingData::new(ds, y).map_err(forecast_err)?;

        let mut model = Prophet::new(Default::default(), WasmstanOptimizer::new());
        model.fit(data, Default::default()).map_err(forecast_err)?;

        let predictions = model
            .predict(Some(PredictionData::new(requested.to_vec())))
            .map_err(forecast_err)?;

        let point = predictions.yhat.point;
        let (lower, upper) = match (predictions.yhat.lower, predictions.yhat.upper) {
            (Some(lower), Some(upper)) => (lower, upper),
            // Uncertainty sampling disabled: collapse the band onto the
            // point estimate.
            _ => (point.clone(), point.clone()),
        };

        Ok(point
            .into_iter()
            .zip(lower)
            .zip(upper)
            .map(|((estimate, lower), upper)| BandedEstimate {
                estimate,
                lower,
                upper,
            })
            .collect())
    }
}

fn forecast_err(err: impl std::fmt::Display) -> WattcastError {
    WattcastError::Forecast(err.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use wattcast_core::AnnualPoint;

    /// Deterministic least-squares trend backend for structural tests.
    /// Keeps the unit suite independent of the real optimizer's runtime.
    pub(crate) struct TrendStub;

    impl ForecastBackend for TrendStub {
        fn fit_predict(
            &self,
            observed: &[(i64, f64)],
            requested: &[i64],
        ) -> WattcastResult<Vec<BandedEstimate>> {
            let n = observed.len() as f64;
            let mean_x = observed.iter().map(|&(x, _)| x as f64).sum::<f64>() / n;
            let mean_y = observed.iter().map(|&(_, y)| y).sum::<f64>() / n;
            let var_x = observed
                .iter()
                .map(|&(x, _)| (x as f64 - mean_x).powi(2))
                .sum::<f64>();
            let cov = observed
                .iter()
                .map(|&(x, y)| (x as f64 - mean_x) * (y - mean_y))
                .sum::<f64>();
            let slope = if var_x == 0.0 { 0.0 } else { cov / var_x };

            Ok(requested
                .iter()
                .map(|&x| {
                    let estimate = mean_y + slope * (x as f64 - mean_x);
                    BandedEstimate {
                        estimate,
                        lower: estimate - 1.0,
                        upper: estimate + 1.0,
                    }
                })
                .collect())
        }
    }

    pub(crate) fn series(entries: &[(i32, f64)]) -> AnnualSeries {
        AnnualSeries::new(
            entries
                .iter()
                .map(|&(year, value)| AnnualPoint { year, value })
                .collect(),
        )
    }

    #[test]
    fn test_insufficient_history() {
        for entries in [&[][..], &[(2020, 1.0)][..]] {
            let err = forecast_with(&TrendStub, &series(entries), 2030).unwrap_err();
            assert!(matches!(
                err,
                WattcastError::InsufficientHistory { distinct_years } if distinct_years == entries.len()
            ));
        }
    }

    #[test]
    fn test_projection_covers_every_year_through_horizon() {
        let s = series(&[(2020, 100.0), (2021, 200.0), (2022, 300.0)]);
        let result = forecast_with(&TrendStub, &s, 2025).unwrap();

        let years: Vec<i32> = result.projection.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024, 2025]);
        assert_eq!(result.extrapolated().len(), 3);
    }

    #[test]
    fn test_gap_years_are_filled_in_projection() {
        let s = series(&[(2018, 1.0), (2020, 2.0), (2023, 3.0)]);
        let result = forecast_with(&TrendStub, &s, 2024).unwrap();

        let years: Vec<i32> = result.projection.iter().map(|p| p.year).collect();
        assert_eq!(years, (2018..=2024).collect::<Vec<_>>());
    }

    #[test]
    fn test_degenerate_horizon_is_in_sample_only() {
        let s = series(&[(2020, 1.0), (2021, 2.0), (2022, 3.0)]);
        for horizon in [2022, 2021, 1990] {
            let result = forecast_with(&TrendStub, &s, horizon).unwrap();
            let years: Vec<i32> = result.projection.iter().map(|p| p.year).collect();
            assert_eq!(years, vec![2020, 2021, 2022]);
            assert!(result.extrapolated().is_empty());
        }
    }

    #[test]
    fn test_history_returned_unchanged() {
        let s = series(&[(2020, 100.0), (2022, 300.0)]);
        let result = forecast_with(&TrendStub, &s, 2030).unwrap();
        assert_eq!(result.history, s);
    }

    #[test]
    fn test_bounds_ordering() {
        let s = series(&[(2020, 10.0), (2021, 20.0), (2022, 35.0)]);
        let result = forecast_with(&TrendStub, &s, 2030).unwrap();
        for point in &result.projection {
            assert!(point.lower <= point.estimate);
            assert!(point.estimate <= point.upper);
        }
    }

    #[test]
    fn test_band_normalized_when_backend_band_crosses_estimate() {
        struct CrossedBand;
        impl ForecastBackend for CrossedBand {
            fn fit_predict(
                &self,
                _observed: &[(i64, f64)],
                requested: &[i64],
            ) -> WattcastResult<Vec<BandedEstimate>> {
                Ok(requested
                    .iter()
                    .map(|_| BandedEstimate {
                        estimate: 5.0,
                        lower: 6.0,
                        upper: 4.0,
                    })
                    .collect())
            }
        }

        let s = series(&[(2020, 1.0), (2021, 2.0)]);
        let result = forecast_with(&CrossedBand, &s, 2022).unwrap();
        for point in &result.projection {
            assert!(point.lower <= point.estimate && point.estimate <= point.upper);
        }
    }

    #[test]
    fn test_backend_length_mismatch_is_an_error() {
        struct Short;
        impl ForecastBackend for Short {
            fn fit_predict(
                &self,
                _observed: &[(i64, f64)],
                _requested: &[i64],
            ) -> WattcastResult<Vec<BandedEstimate>> {
                Ok(vec![])
            }
        }

        let s = series(&[(2020, 1.0), (2021, 2.0)]);
        assert!(matches!(
            forecast_with(&Short, &s, 2025),
            Err(WattcastError::Forecast(_))
        ));
    }

    #[test]
    fn test_year_anchoring_is_january_first_utc() {
        assert_eq!(year_timestamp(1970).unwrap(), 0);
        // 2020-01-01T00:00:00Z
        assert_eq!(year_timestamp(2020).unwrap(), 1_577_836_800);
    }
}
