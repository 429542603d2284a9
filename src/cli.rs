use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jfifscope")]
#[command(author, version, about = "Inspect the marker segment structure of JPEG/JFIF files")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a JPEG file and list its segments
    Inspect {
        /// File to inspect
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a JPEG file is structurally valid
    Validate {
        /// File to validate
        #[arg(required = true)]
        file: PathBuf,
    },

    /// List known marker codes and their descriptions
    Markers,

    /// Write a default configuration file
    InitConfig {
        /// Where to write the config
        #[arg(default_value = "jfifscope.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}
