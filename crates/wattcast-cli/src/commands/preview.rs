use std::io::{self, Write};

use anyhow::Result;
use tabwriter::TabWriter;

use wattcast_cli::config::AppConfig;
use wattcast_io::load_dataset;
use wattcast_ts::{aggregate_annual, derive_co2};

pub fn handle(
    models: &str,
    grid: &str,
    country: Option<&String>,
    until: Option<i32>,
    config: &AppConfig,
) -> Result<()> {
    let dataset = load_dataset(models, grid)?;
    let annual_kwh = aggregate_annual(dataset.energy(), until);

    // CO2 column only when a country is selected (flag or config default).
    let country = country.cloned().or_else(|| config.default_country.clone());
    let annual_co2 = match &country {
        Some(country) => {
            let intensity = dataset.intensity(country)?;
            Some(derive_co2(&annual_kwh, intensity)?)
        }
        None => None,
    };

    let mut writer = TabWriter::new(io::stdout());
    match (&country, &annual_co2) {
        (Some(country), Some(co2)) => {
            writeln!(writer, "YEAR\tKWH\tKG CO2 ({country})")?;
            for (kwh, co2) in annual_kwh.iter().zip(co2.iter()) {
                writeln!(writer, "{}\t{:.0}\t{:.1}", kwh.year, kwh.value, co2.value)?;
            }
        }
        _ => {
            writeln!(writer, "YEAR\tKWH")?;
            for point in &annual_kwh {
                writeln!(writer, "{}\t{:.0}", point.year, point.value)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
