//! # wattcast-viz: Chart Payloads
//!
//! Serializable chart payloads for the dashboard front end: single-series
//! forecast charts with confidence bands, the emissions-vs-model-size
//! scatter, and the multi-country comparison overlay. This crate builds
//! data, not pixels; rendering is the front end's job.

pub mod charts;

pub use charts::{
    co2_scatter, forecast_chart, overlay_chart, ChartPoint, ForecastChart, OverlayChart,
    OverlaySeries, ScatterChart, ScatterPoint, SkippedCountry,
};
