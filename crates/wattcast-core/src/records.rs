//! Input table row types.
//!
//! One row per training run in the model-energy table, one row per country
//! in the grid intensity table. Both are immutable value objects loaded
//! once per session and shared through a [`crate::Dataset`].

use serde::{Deserialize, Serialize};

use crate::units::{GramsPerKilowattHour, KilowattHours};

/// Canonical name of the model-energy input table, used in load errors.
pub const ENERGY_TABLE: &str = "models_energy";

/// Canonical name of the grid-intensity input table, used in load errors.
pub const GRID_TABLE: &str = "grid_intensity";

/// One training run: the year it happened, the energy it used, the model's
/// parameter count (millions) and its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub year: i32,
    pub kwh: KilowattHours,
    pub params_m: f64,
    pub model: String,
}

/// One country's grid mix emissions factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRecord {
    pub country: String,
    pub gco2_per_kwh: GramsPerKilowattHour,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_record_roundtrip() {
        let record = EnergyRecord {
            year: 2020,
            kwh: KilowattHours(1287000.0),
            params_m: 175000.0,
            model: "GPT-3".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: EnergyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_grid_record_fields_serialize_flat() {
        let record = GridRecord {
            country: "FR".to_string(),
            gco2_per_kwh: GramsPerKilowattHour(56.0),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"country":"FR","gco2_per_kwh":56.0}"#);
    }
}
