//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shapeschema: generate JSON Schema from CSV field lists
#[derive(Parser)]
#[command(name = "shapeschema")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a JSON Schema rooted at one CSV file
    Build {
        /// Project root directory
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Root schema file name (e.g. "Ship.csv" or "Ship")
        #[arg(value_name = "NAME")]
        name: String,

        /// Write the schema to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print compact JSON instead of pretty JSON
        #[arg(long)]
        compact: bool,

        /// Reference resolved below the root (repeatable, replaces the default "mode" and "crew")
        #[arg(long = "allow-nested", value_name = "TOKEN")]
        allow_nested: Vec<String>,

        /// Path segment marking catalog (enum) files
        #[arg(long, default_value_t = shapeschema::DEFAULT_CATALOG_SEGMENT.to_string())]
        catalog_segment: String,
    },

    /// List the files available for type references
    Files {
        /// Project root directory
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
