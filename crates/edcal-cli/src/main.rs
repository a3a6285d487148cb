//! Edcal CLI Application
//!
//! Command-line interface for the edcal editorial calendar.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use edcal_core::CalendarBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let calendar = CalendarBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize calendar")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("edcal started");

    Cli::new(calendar, renderer).run(command).await
}
