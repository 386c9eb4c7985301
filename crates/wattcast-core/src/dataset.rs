//! Immutable handle over the two loaded input tables.
//!
//! The whole pipeline is a pure function of a [`Dataset`] plus request
//! parameters, so there is no module-level state anywhere: load once, pass
//! by reference, recompute per request.

use std::collections::{HashMap, HashSet};

use crate::error::{WattcastError, WattcastResult};
use crate::records::{EnergyRecord, GridRecord, GRID_TABLE};
use crate::units::GramsPerKilowattHour;

/// Loaded input tables plus a prebuilt country -> intensity index.
#[derive(Debug, Clone)]
pub struct Dataset {
    energy: Vec<EnergyRecord>,
    grid: Vec<GridRecord>,
    intensity: HashMap<String, GramsPerKilowattHour>,
}

impl Dataset {
    /// Assemble a dataset from loaded rows.
    ///
    /// Duplicate country codes in the grid table are rejected here rather
    /// than letting a positional lookup silently pick one.
    pub fn new(energy: Vec<EnergyRecord>, grid: Vec<GridRecord>) -> WattcastResult<Self> {
        let mut seen = HashSet::new();
        let mut intensity = HashMap::with_capacity(grid.len());
        for record in &grid {
            if !seen.insert(record.country.clone()) {
                return Err(WattcastError::data_load(
                    GRID_TABLE,
                    format!("duplicate country code '{}'", record.country),
                ));
            }
            intensity.insert(record.country.clone(), record.gco2_per_kwh);
        }
        Ok(Self {
            energy,
            grid,
            intensity,
        })
    }

    pub fn energy(&self) -> &[EnergyRecord] {
        &self.energy
    }

    pub fn grid(&self) -> &[GridRecord] {
        &self.grid
    }

    /// Country codes in grid-table order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.grid.iter().map(|r| r.country.as_str())
    }

    /// Intensity factor for `country`, or `UnknownCountry`.
    pub fn intensity(&self, country: &str) -> WattcastResult<GramsPerKilowattHour> {
        self.intensity
            .get(country)
            .copied()
            .ok_or_else(|| WattcastError::UnknownCountry(country.to_string()))
    }

    /// (min, max) year across the energy table, if it has any rows.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut years = self.energy.iter().map(|r| r.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), year| {
            (lo.min(year), hi.max(year))
        });
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::KilowattHours;

    fn energy_row(year: i32, kwh: f64) -> EnergyRecord {
        EnergyRecord {
            year,
            kwh: KilowattHours(kwh),
            params_m: 1.0,
            model: format!("model-{year}"),
        }
    }

    fn grid_row(country: &str, intensity: f64) -> GridRecord {
        GridRecord {
            country: country.to_string(),
            gco2_per_kwh: GramsPerKilowattHour(intensity),
        }
    }

    #[test]
    fn test_intensity_lookup() {
        let dataset = Dataset::new(
            vec![energy_row(2020, 100.0)],
            vec![grid_row("US", 400.0), grid_row("FR", 56.0)],
        )
        .unwrap();

        assert_eq!(
            dataset.intensity("FR").unwrap(),
            GramsPerKilowattHour(56.0)
        );
        assert!(matches!(
            dataset.intensity("ZZ"),
            Err(WattcastError::UnknownCountry(code)) if code == "ZZ"
        ));
    }

    #[test]
    fn test_duplicate_country_rejected() {
        let result = Dataset::new(
            Vec::new(),
            vec![grid_row("US", 400.0), grid_row("US", 380.0)],
        );
        match result {
            Err(WattcastError::DataLoad { table, reason }) => {
                assert_eq!(table, GRID_TABLE);
                assert!(reason.contains("US"));
            }
            other => panic!("expected DataLoad error, got {other:?}"),
        }
    }

    #[test]
    fn test_year_range() {
        let dataset = Dataset::new(
            vec![
                energy_row(2021, 1.0),
                energy_row(2019, 1.0),
                energy_row(2022, 1.0),
            ],
            vec![grid_row("US", 400.0)],
        )
        .unwrap();
        assert_eq!(dataset.year_range(), Some((2019, 2022)));

        let empty = Dataset::new(Vec::new(), vec![grid_row("US", 400.0)]).unwrap();
        assert_eq!(empty.year_range(), None);
    }

    #[test]
    fn test_countries_preserve_table_order() {
        let dataset = Dataset::new(
            Vec::new(),
            vec![grid_row("DE", 350.0), grid_row("US", 400.0), grid_row("FR", 56.0)],
        )
        .unwrap();
        let countries: Vec<&str> = dataset.countries().collect();
        assert_eq!(countries, vec!["DE", "US", "FR"]);
    }
}
