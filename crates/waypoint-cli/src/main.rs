//! Waypoint CLI application
//!
//! Runs one planner, goal, plan, task or version command per invocation, or
//! serves the REST API with `wp serve`.

mod args;
mod cli;
mod http;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::{Config, WaypointBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        config,
        no_color,
        command,
    } = Args::parse();

    let mut config =
        Config::load_or_default(config.as_deref()).context("Failed to load configuration")?;

    let waypoint = WaypointBuilder::new()
        .with_database_path(database_file.or_else(|| config.database_path.clone()))
        .build()
        .await
        .context("Failed to initialize waypoint")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started with {:?} storage", config.storage);

    match command {
        Serve { bind, port } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }
            http::run_serve(waypoint, &config.address()).await
        }
        Planner { command } => Cli::new(waypoint, renderer).handle_planner_command(command),
        Goal { command } => Cli::new(waypoint, renderer).handle_goal_command(command),
        Plan { command } => Cli::new(waypoint, renderer).handle_plan_command(command),
        Task { command } => Cli::new(waypoint, renderer).handle_task_command(command),
        Version { command } => Cli::new(waypoint, renderer).handle_version_command(command),
    }
}
