//! PawPal - daily care-task scheduler
//!
//! CLI entry point for planning a day of pet care from a roster file.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use pawpal::cli::{Cli, Command, OutputFormat};
use pawpal::config::Config;
use pawpal::domain::Owner;
use pawpal::roster::Roster;
use pawpal::scheduler::Scheduler;

fn setup_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Some(Command::Plan { roster, date, format }) => cmd_plan(&config, roster.as_ref(), date, format),
        Some(Command::Due { roster, date }) => cmd_due(&config, roster.as_ref(), date),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Build the owner aggregate from the roster file
fn load_owner(config: &Config, roster_path: Option<&PathBuf>) -> Result<Owner> {
    let path = roster_path.cloned().unwrap_or_else(|| config.roster.path.clone());
    let roster = Roster::load(&path)?;
    Ok(roster.into_owner(config.scheduling.default_budget_minutes))
}

/// Generate the daily plan and print it
fn cmd_plan(
    config: &Config,
    roster_path: Option<&PathBuf>,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    let owner = load_owner(config, roster_path)?;
    let as_of = date.unwrap_or_else(|| Local::now().date_naive());
    info!("Planning for {} on {}", owner.name, as_of);

    let mut scheduler = Scheduler::new(&owner);
    scheduler.generate_daily_plan(as_of);

    match format {
        OutputFormat::Text => {
            let banner = "=".repeat(60);
            println!("{}", banner);
            println!("{}", format!("SCHEDULE FOR {}", as_of).bold());
            println!("{}", banner);
            print!("{}", scheduler.explain_plan());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(scheduler.plan())?);
        }
    }

    Ok(())
}

/// List due tasks per pet, before any budget filtering
fn cmd_due(config: &Config, roster_path: Option<&PathBuf>, date: Option<NaiveDate>) -> Result<()> {
    let owner = load_owner(config, roster_path)?;
    let as_of = date.unwrap_or_else(|| Local::now().date_naive());

    let due = owner.tasks_due_on(as_of);
    if due.is_empty() {
        println!("Nothing due on {}", as_of);
        return Ok(());
    }

    println!("Due on {}:", as_of);
    for (pet, tasks) in due {
        println!("{} ({}):", pet.name.bold(), pet.species);
        for task in tasks {
            println!("  - {} ({} min) [{}]", task.name, task.duration, task.frequency);
        }
    }

    Ok(())
}
