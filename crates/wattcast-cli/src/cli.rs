use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_ENERGY_PATH: &str = "data/models_energy.csv";
pub const DEFAULT_GRID_PATH: &str = "data/grid_intensity.csv";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Path to a wattcast.toml defaults file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Headline totals: energy and emissions for a country up to a year
    Kpi {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
        /// Country for the CO2 conversion (falls back to the config file)
        #[arg(long)]
        country: Option<String>,
        /// Only include training runs up to this year
        #[arg(long)]
        until: Option<i32>,
        /// Also write the summary as JSON to this path
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Annual aggregation preview tables
    Preview {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
        /// Add a CO2 column for this country
        #[arg(long)]
        country: Option<String>,
        /// Only include training runs up to this year
        #[arg(long)]
        until: Option<i32>,
    },
    /// Forecast annual series to the horizon year
    Forecast {
        #[command(subcommand)]
        command: ForecastCommands,
    },
    /// Side-by-side CO2 forecasts across countries
    Compare {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
        /// Comma-separated country codes (falls back to the config file)
        #[arg(long, value_delimiter = ',')]
        countries: Vec<String>,
        /// Last year to forecast
        #[arg(long)]
        horizon_year: Option<i32>,
        /// Write the comparison as JSON to this path instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Chart payloads for the dashboard front end
    Chart {
        #[command(subcommand)]
        command: ChartCommands,
    },
    /// Load both tables and report what they contain
    Validate {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ForecastCommands {
    /// Forecast annual training energy (kWh)
    Energy {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
        /// Last year to forecast
        #[arg(long)]
        horizon_year: Option<i32>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write to this path instead of stdout (required for csv)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Forecast annual emissions (kg CO2) for a country
    Co2 {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
        /// Country for the CO2 conversion (falls back to the config file)
        #[arg(long)]
        country: Option<String>,
        /// Last year to forecast
        #[arg(long)]
        horizon_year: Option<i32>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write to this path instead of stdout (required for csv)
        #[arg(short, long)]
        out: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChartCommands {
    /// Single-series forecast chart with confidence band
    Forecast {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
        /// Which series to chart
        #[arg(long, value_enum, default_value_t = ChartSeries::Energy)]
        series: ChartSeries,
        /// Country for the CO2 conversion (co2 series only)
        #[arg(long)]
        country: Option<String>,
        /// Last year to forecast
        #[arg(long)]
        horizon_year: Option<i32>,
        /// Write the payload to this path instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Emissions vs. model size scatter
    Scatter {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
        /// Country for the CO2 conversion (falls back to the config file)
        #[arg(long)]
        country: Option<String>,
        /// Only include training runs up to this year
        #[arg(long)]
        until: Option<i32>,
        /// Write the payload to this path instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Multi-country CO2 forecast overlay
    Overlay {
        /// Path to the model-energy CSV
        #[arg(long, default_value = DEFAULT_ENERGY_PATH)]
        models: String,
        /// Path to the grid-intensity CSV
        #[arg(long, default_value = DEFAULT_GRID_PATH)]
        grid: String,
        /// Comma-separated country codes (falls back to the config file)
        #[arg(long, value_delimiter = ',')]
        countries: Vec<String>,
        /// Last year to forecast
        #[arg(long)]
        horizon_year: Option<i32>,
        /// Write the payload to this path instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSeries {
    Energy,
    Co2,
}
