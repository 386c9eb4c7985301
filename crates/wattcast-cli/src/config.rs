//! Optional `wattcast.toml` defaults file.
//!
//! Every value can be overridden per invocation with a CLI flag; the file
//! only supplies defaults. A missing file means built-in defaults, a
//! malformed file is an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wattcast_ts::DEFAULT_HORIZON_YEAR;

/// Name of the defaults file looked up in the working directory.
pub const CONFIG_FILE: &str = "wattcast.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Last year to forecast.
    #[serde(default = "default_horizon_year")]
    pub horizon_year: i32,
    /// Country used when a command is run without `--country`.
    #[serde(default)]
    pub default_country: Option<String>,
    /// Countries used when `compare`/`chart overlay` is run without
    /// `--countries`.
    #[serde(default = "default_compare_countries")]
    pub compare_countries: Vec<String>,
}

fn default_horizon_year() -> i32 {
    DEFAULT_HORIZON_YEAR
}

fn default_compare_countries() -> Vec<String> {
    ["US", "DE", "FR"].map(String::from).to_vec()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            horizon_year: default_horizon_year(),
            default_country: None,
            compare_countries: default_compare_countries(),
        }
    }
}

/// Load the config from `path`, or from `wattcast.toml` in the working
/// directory, or fall back to defaults when neither exists.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(path) => path,
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if !default_path.exists() {
                return Ok(AppConfig::default());
            }
            default_path
        }
    };
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config '{}'", path.display()))?;
    toml::from_str(&data).with_context(|| format!("parsing config '{}'", path.display()))
}
