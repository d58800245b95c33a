//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "habitsched")]
#[command(about = "Habit frequency and reminder scheduler", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file with reminder defaults (overrides HABITSCHED_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a schedule file with default settings
    New {
        /// Schedule file to create
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show a schedule in readable form
    Show {
        /// Schedule file
        file: PathBuf,
    },

    /// Apply edits such as type=weekly, day=sat, times=+1, reminder=off, time=07:30
    Edit {
        /// Schedule file
        file: PathBuf,

        /// Edits applied in order
        #[arg(required = true, value_name = "EDIT")]
        edits: Vec<String>,
    },

    /// Check a schedule and list every problem
    Validate {
        /// Schedule file
        file: PathBuf,
    },

    /// List upcoming reminder times
    Next {
        /// Schedule file
        file: PathBuf,

        /// Start point as YYYY-MM-DD HH:MM (default: now)
        #[arg(long)]
        after: Option<String>,

        /// Number of reminders to list
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Show the effective configuration
    Config {
        /// Also write the effective configuration to this TOML file
        #[arg(long, value_name = "PATH")]
        write: Option<PathBuf>,
    },
}
