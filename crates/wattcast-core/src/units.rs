//! Compile-time unit safety for energy and emissions quantities.
//!
//! Prevents mixing incompatible units like kWh and kg CO2, or a grid
//! intensity factor and an energy total.
//!
//! # Zero Runtime Overhead
//!
//! All types use `#[repr(transparent)]` ensuring they have the same memory
//! layout as `f64`. The compiler optimizes away all wrapper overhead.
//!
//! # Usage
//!
//! ```
//! use wattcast_core::units::{KilowattHours, GramsPerKilowattHour};
//!
//! let training_run = KilowattHours(1250.0);
//!
//! // This compiles - same units
//! let total = training_run + KilowattHours(340.0);
//!
//! // This would NOT compile - different units
//! // let wrong = training_run + GramsPerKilowattHour(400.0);
//!
//! // Explicit conversion from energy to emissions
//! let co2 = total.emissions_at(GramsPerKilowattHour(400.0));
//! assert!((co2.value() - 636.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Macro to implement common arithmetic operations for unit types
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, rhs: $type) -> Self::Output {
                <$type>::new(self * rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Div<$type> for $type {
            type Output = f64;
            fn div(self, rhs: $type) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.2} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Create a new value
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            /// Check if value is finite
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            /// Minimum of two values
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Maximum of two values
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }
    };
}

// =============================================================================
// Energy Units
// =============================================================================

/// Energy in kilowatt-hours (kWh)
///
/// The unit in which training-run energy usage is recorded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilowattHours(pub f64);

impl_unit_ops!(KilowattHours, "kWh");

// =============================================================================
// Emission Units
// =============================================================================

/// Emissions in kilograms of CO2 (kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilogramsCo2(pub f64);

impl_unit_ops!(KilogramsCo2, "kg CO2");

/// Grid carbon intensity in grams of CO2 per kilowatt-hour (gCO2/kWh)
///
/// The emissions factor of a country's electricity mix. One value per
/// country in the grid intensity table.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GramsPerKilowattHour(pub f64);

impl_unit_ops!(GramsPerKilowattHour, "gCO2/kWh");

// Unit relationships
impl KilowattHours {
    /// Emissions produced by this much energy on a grid with the given
    /// intensity: kg CO2 = kWh x gCO2/kWh / 1000.
    #[inline]
    pub fn emissions_at(self, intensity: GramsPerKilowattHour) -> KilogramsCo2 {
        KilogramsCo2(self.0 * intensity.0 / 1000.0)
    }
}

impl GramsPerKilowattHour {
    /// Whether this factor is valid for CO2 derivation (non-negative).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kwh_arithmetic() {
        let a = KilowattHours(100.0);
        let b = KilowattHours(50.0);

        assert_eq!((a + b).value(), 150.0);
        assert_eq!((a - b).value(), 50.0);
        assert_eq!((-a).value(), -100.0);
        assert_eq!((a * 2.0).value(), 200.0);
        assert_eq!((2.0 * a).value(), 200.0);
        assert_eq!((a / 2.0).value(), 50.0);
        assert_eq!(a / b, 2.0);
    }

    #[test]
    fn test_emissions_conversion() {
        // 100 kWh on a 400 gCO2/kWh grid -> 40 kg CO2
        let energy = KilowattHours(100.0);
        let co2 = energy.emissions_at(GramsPerKilowattHour(400.0));

        assert!((co2.value() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_emissions_linearity() {
        let energy = KilowattHours(123.0);
        let k = 250.0;
        let co2 = energy.emissions_at(GramsPerKilowattHour(k));

        assert!((co2.value() - energy.value() * k / 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_intensity_validity() {
        assert!(GramsPerKilowattHour(0.0).is_valid());
        assert!(GramsPerKilowattHour(385.0).is_valid());
        assert!(!GramsPerKilowattHour(-1.0).is_valid());
    }

    #[test]
    fn test_sum_iterator() {
        let runs = vec![
            KilowattHours(10.0),
            KilowattHours(20.0),
            KilowattHours(30.0),
        ];
        let total: KilowattHours = runs.into_iter().sum();

        assert_eq!(total.value(), 60.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", KilowattHours(100.0)), "100.00 kWh");
        assert_eq!(format!("{}", GramsPerKilowattHour(385.5)), "385.50 gCO2/kWh");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&KilowattHours(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let back: KilowattHours = serde_json::from_str("12.5").unwrap();
        assert_eq!(back, KilowattHours(12.5));
    }
}
