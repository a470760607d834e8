use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GoalCommands, PlanCommands, PlannerCommands, TaskCommands, VersionCommands};

/// Command-line interface for the Waypoint planner
///
/// Waypoint organizes work as planners, the goals grouped under them, and
/// the dated plans that move each goal forward. Standalone tasks and
/// versioned goal snapshots are kept alongside. The same data is served
/// over a REST API with `wp serve`.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to the configured
    /// `database_path`, then $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/waypoint/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Address to listen on [default: configured bind, then 127.0.0.1]
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on [default: configured port, then 8080]
        #[arg(long)]
        port: Option<u16>,
    },
    /// Manage planners
    #[command(alias = "pl")]
    Planner {
        #[command(subcommand)]
        command: PlannerCommands,
    },
    /// Manage goals
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Manage plans and their embedded tasks
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage standalone tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Record and inspect goal snapshots
    #[command(alias = "v")]
    Version {
        #[command(subcommand)]
        command: VersionCommands,
    },
}
