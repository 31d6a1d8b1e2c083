//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vent")]
#[command(about = "Terminal venting journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new venting journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Release text into the journal (uses the current draft when TEXT is omitted)
    Release {
        /// Text to release
        text: Option<String>,
    },

    /// Set, show or discard the unsent draft
    Draft {
        /// Replace the draft with this text
        text: Option<String>,

        /// Show the current draft
        #[arg(short, long)]
        show: bool,

        /// Discard the draft
        #[arg(short, long)]
        clear: bool,
    },

    /// Build up the draft interactively from stdin (autosaves while you pause)
    Compose,

    /// Show the journal size and draft state
    Status,

    /// List released entries
    History {
        /// Show only the most recent N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export the full history as a plain-text file
    Export {
        /// Directory to write the export to (default: journal root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
