//! End-to-end forecast through the real Prophet backend.
//!
//! Slower than the unit suite (the optimizer runs inside a WASM Stan
//! build), so it stays in one integration test. Numeric outputs are
//! library-version dependent and are deliberately not asserted; only the
//! structural contract is.

use wattcast_core::{AnnualPoint, AnnualSeries};
use wattcast_ts::{forecast, DEFAULT_HORIZON_YEAR};

fn annual(entries: &[(i32, f64)]) -> AnnualSeries {
    AnnualSeries::new(
        entries
            .iter()
            .map(|&(year, value)| AnnualPoint { year, value })
            .collect(),
    )
}

#[test]
fn prophet_projects_through_default_horizon() {
    let series = annual(&[
        (2018, 310_000.0),
        (2019, 452_000.0),
        (2020, 1_512_000.0),
        (2021, 2_030_000.0),
        (2022, 3_400_000.0),
        (2023, 5_100_000.0),
    ]);

    let result = forecast(&series, DEFAULT_HORIZON_YEAR).unwrap();

    assert_eq!(result.history, series);

    let years: Vec<i32> = result.projection.iter().map(|p| p.year).collect();
    assert_eq!(years, (2018..=2030).collect::<Vec<_>>());

    for point in &result.projection {
        assert!(point.estimate.is_finite());
        assert!(point.lower <= point.estimate, "at year {}", point.year);
        assert!(point.estimate <= point.upper, "at year {}", point.year);
    }

    // 2024..=2030 are extrapolation
    assert_eq!(result.extrapolated().len(), 7);
}
