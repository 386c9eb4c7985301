use std::io::{self, Write};

use anyhow::Result;
use tabwriter::TabWriter;

use wattcast_core::{ENERGY_TABLE, GRID_TABLE};
use wattcast_io::load_dataset;

pub fn handle(models: &str, grid: &str) -> Result<()> {
    let dataset = load_dataset(models, grid)?;

    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "TABLE\tROWS\tDETAIL")?;
    let detail = match dataset.year_range() {
        Some((min, max)) => format!("years {min}-{max}"),
        None => "no rows".to_string(),
    };
    writeln!(
        writer,
        "{ENERGY_TABLE}\t{}\t{detail}",
        dataset.energy().len()
    )?;
    writeln!(
        writer,
        "{GRID_TABLE}\t{}\t{} countries",
        dataset.grid().len(),
        dataset.countries().count()
    )?;
    writer.flush()?;
    Ok(())
}
