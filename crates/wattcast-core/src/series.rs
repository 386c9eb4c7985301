//! Annual series and forecast value objects.
//!
//! An [`AnnualSeries`] is an ordered sequence of (year, value) pairs with
//! strictly increasing years. Years may be non-contiguous: a year with no
//! source rows is absent, not zero. Both the kWh aggregation and the
//! derived CO2 series use the same shape; the value's unit is decided by
//! the producing operation.

use serde::{Deserialize, Serialize};

/// One (year, value) entry of an annual series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualPoint {
    pub year: i32,
    pub value: f64,
}

/// Ordered annual series, strictly increasing by year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnualSeries {
    points: Vec<AnnualPoint>,
}

impl AnnualSeries {
    /// Build a series from points already sorted ascending by year.
    ///
    /// Callers are expected to hand over one entry per distinct year;
    /// producers in this workspace aggregate before constructing.
    pub fn new(points: Vec<AnnualPoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].year < w[1].year),
            "annual series years must be strictly increasing"
        );
        Self { points }
    }

    pub fn points(&self) -> &[AnnualPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnualPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First observed year, if any.
    pub fn first_year(&self) -> Option<i32> {
        self.points.first().map(|p| p.year)
    }

    /// Last observed year, if any.
    pub fn last_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }

    /// Value recorded for `year`, if present.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points
            .binary_search_by_key(&year, |p| p.year)
            .ok()
            .map(|idx| self.points[idx].value)
    }

    /// Sum of all values in the series.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// A new series with every value multiplied by `factor`, same years.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| AnnualPoint {
                    year: p.year,
                    value: p.value * factor,
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AnnualSeries {
    type Item = &'a AnnualPoint;
    type IntoIter = std::slice::Iter<'a, AnnualPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// One forecast entry: point estimate with its uncertainty band.
///
/// Entries for years up to the last observed year are in-sample fit;
/// later years are extrapolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Output of a forecast: the observed series unchanged, plus one
/// projection entry per year from the first observed year through the
/// horizon, gap-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub history: AnnualSeries,
    pub projection: Vec<ForecastPoint>,
}

impl ForecastResult {
    /// Last year with observed data.
    pub fn last_observed_year(&self) -> Option<i32> {
        self.history.last_year()
    }

    /// Projection entries strictly beyond the observed range.
    pub fn extrapolated(&self) -> &[ForecastPoint] {
        match self.last_observed_year() {
            Some(last) => {
                let split = self.projection.partition_point(|p| p.year <= last);
                &self.projection[split..]
            }
            None => &self.projection,
        }
    }
}
