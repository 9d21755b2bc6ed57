//! Greenhouse CLI Application
//!
//! Command-line interface and REST server for the greenhouse plant-care
//! tracker.

mod args;
mod cli;
mod renderer;
mod server;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use args::{Args, Commands, ServeArgs};
use clap::Parser;
use cli::{Cli, ScheduleArgs};
use greenhouse_core::{schedule::DEFAULT_HORIZON_DAYS, TrackerBuilder};
use log::info;
use renderer::TerminalRenderer;
use server::run_http_server;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        upload_dir,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_data_path(data_file)
        .with_upload_dir(upload_dir)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Greenhouse started");

    match command {
        Some(Plant { command }) => {
            Cli::new(tracker, renderer)
                .handle_plant_command(command)
                .await
        }
        Some(Profile { command }) => {
            Cli::new(tracker, renderer)
                .handle_profile_command(command)
                .await
        }
        Some(Category { command }) => {
            Cli::new(tracker, renderer)
                .handle_category_command(command)
                .await
        }
        Some(Schedule(args)) => Cli::new(tracker, renderer).show_schedule(args).await,
        Some(Assign(args)) => Cli::new(tracker, renderer).assign(args).await,
        Some(Serve(ServeArgs { host, port })) => {
            info!("Starting Greenhouse HTTP server");
            run_http_server(tracker, SocketAddr::new(host, port)).await
        }
        None => {
            Cli::new(tracker, renderer)
                .show_schedule(ScheduleArgs {
                    horizon: DEFAULT_HORIZON_DAYS,
                })
                .await
        }
    }
}
