use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use wattcast_cli::cli::{Cli, Commands};
use wattcast_cli::config::load_config;

mod commands;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let result = run(&cli);
    if let Err(err) = result {
        error!("command failed: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Some(Commands::Kpi {
            models,
            grid,
            country,
            until,
            out,
        }) => {
            commands::kpi::handle(
                models,
                grid,
                country.as_ref(),
                *until,
                out.as_deref(),
                &config,
            )?;
            info!("KPI command successful!");
        }
        Some(Commands::Preview {
            models,
            grid,
            country,
            until,
        }) => {
            commands::preview::handle(models, grid, country.as_ref(), *until, &config)?;
            info!("Preview command successful!");
        }
        Some(Commands::Forecast { command }) => {
            commands::forecast::handle(command, &config)?;
            info!("Forecast command successful!");
        }
        Some(Commands::Compare {
            models,
            grid,
            countries,
            horizon_year,
            out,
        }) => {
            commands::compare::handle(
                models,
                grid,
                countries,
                *horizon_year,
                out.as_deref(),
                &config,
            )?;
            info!("Compare command successful!");
        }
        Some(Commands::Chart { command }) => {
            commands::chart::handle(command, &config)?;
            info!("Chart command successful!");
        }
        Some(Commands::Validate { models, grid }) => {
            commands::validate::handle(models, grid)?;
            info!("Validation successful!");
        }
        None => {
            info!("No subcommand provided. Use `wattcast --help` for more information.");
        }
    }
    Ok(())
}
