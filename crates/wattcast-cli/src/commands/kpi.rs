use std::io::{self, Write};

use anyhow::Result;
use tabwriter::TabWriter;

use wattcast_cli::config::AppConfig;
use wattcast_io::{load_dataset, write_json};
use wattcast_ts::kpi_summary;

use crate::commands::util::resolve_country;

pub fn handle(
    models: &str,
    grid: &str,
    country: Option<&String>,
    until: Option<i32>,
    out: Option<&str>,
    config: &AppConfig,
) -> Result<()> {
    let dataset = load_dataset(models, grid)?;
    let country = resolve_country(country, config)?;
    let kpi = kpi_summary(&dataset, &country, until)?;

    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "METRIC\tVALUE")?;
    writeln!(writer, "Training runs\t{}", kpi.training_runs)?;
    writeln!(writer, "Total energy\t{}", kpi.total_kwh)?;
    writeln!(
        writer,
        "Total emissions in {}\t{}",
        kpi.country, kpi.total_co2_kg
    )?;
    if let Some(cutoff) = kpi.cutoff_year {
        writeln!(writer, "Cutoff year\t{cutoff}")?;
    }
    writer.flush()?;

    if let Some(path) = out {
        write_json(path, &kpi)?;
        println!("Wrote {path}");
    }
    Ok(())
}
