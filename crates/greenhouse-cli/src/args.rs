use std::{net::IpAddr, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::cli::{AssignArgs, CategoryCommands, PlantCommands, ProfileCommands, ScheduleArgs};

/// Command-line interface for the Greenhouse plant-care tracker
///
/// Greenhouse keeps track of plants, their watering and feeding history and
/// the people who look after them, and projects who should water or feed
/// what, and when. Data lives in a single JSON file that the bundled REST
/// server shares with the browser UI.
#[derive(Parser)]
#[command(version, about, name = "greenhouse")]
pub struct Args {
    /// Path to the JSON data file. Defaults to
    /// $XDG_DATA_HOME/greenhouse/data.json
    #[arg(long, global = true, env = "GREENHOUSE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory for uploaded photos. Defaults to an `uploads` directory next
    /// to the data file
    #[arg(long, global = true, env = "GREENHOUSE_UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Greenhouse CLI
///
/// Without a command the care schedule for the next two weeks is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plants and record care
    #[command(alias = "p")]
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Manage caretaker profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Manage care categories
    #[command(alias = "c")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Show upcoming watering and feeding tasks
    #[command(alias = "s")]
    Schedule(ScheduleArgs),
    /// Assign a scheduled task to a caretaker
    Assign(AssignArgs),
    /// Start the REST API server
    Serve(ServeArgs),
}

/// Options for the REST API server
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "GREENHOUSE_PORT")]
    pub port: u16,
}
