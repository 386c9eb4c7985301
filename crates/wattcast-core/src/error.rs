//! Unified error types for the wattcast ecosystem
//!
//! This module provides a common error type [`WattcastError`] that can
//! represent errors from any part of the pipeline. Domain-specific failures
//! (table loading, country lookup, forecasting) are converted to
//! `WattcastError` for uniform handling at API boundaries.
//!
//! # Example
//!
//! ```ignore
//! use wattcast_core::{WattcastError, WattcastResult};
//!
//! fn run_pipeline(models: &str, grid: &str) -> WattcastResult<()> {
//!     let dataset = load_dataset(models, grid)?;
//!     forecast_energy(&dataset)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all wattcast operations.
#[derive(Error, Debug)]
pub enum WattcastError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input table could not be loaded: missing required column,
    /// non-numeric field, duplicate key. Always names the offending table.
    #[error("failed to load table '{table}': {reason}")]
    DataLoad { table: String, reason: String },

    /// Requested country code is not present in the grid intensity table.
    #[error("unknown country '{0}': not present in the grid intensity table")]
    UnknownCountry(String),

    /// A negative intensity value reached the CO2 derivation step.
    #[error("invalid grid intensity {0} gCO2/kWh: must be non-negative")]
    InvalidIntensity(f64),

    /// Fewer than two distinct years of history are available for fitting.
    #[error("insufficient history: {distinct_years} distinct year(s), at least 2 required")]
    InsufficientHistory { distinct_years: usize },

    /// Errors surfaced by the forecasting backend.
    #[error("forecast error: {0}")]
    Forecast(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using WattcastError.
pub type WattcastResult<T> = Result<T, WattcastError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for WattcastError {
    fn from(err: anyhow::Error) -> Self {
        WattcastError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for WattcastError {
    fn from(s: String) -> Self {
        WattcastError::Other(s)
    }
}

impl From<&str> for WattcastError {
    fn from(s: &str) -> Self {
        WattcastError::Other(s.to_string())
    }
}

impl WattcastError {
    /// Build a `DataLoad` error for `table` from anything displayable.
    pub fn data_load(table: &str, reason: impl std::fmt::Display) -> Self {
        WattcastError::DataLoad {
            table: table.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WattcastError::data_load("grid_intensity", "missing column 'country'");
        assert!(err.to_string().contains("grid_intensity"));
        assert!(err.to_string().contains("missing column"));
    }

    #[test]
    fn test_unknown_country_display() {
        let err = WattcastError::UnknownCountry("ZZ".into());
        assert!(err.to_string().contains("ZZ"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WattcastError = io_err.into();
        assert!(matches!(err, WattcastError::Io(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> WattcastResult<()> {
            Err(WattcastError::InvalidIntensity(-1.0))
        }

        fn outer() -> WattcastResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
