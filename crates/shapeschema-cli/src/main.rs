//! shapeschema CLI - generate JSON Schema from CSV field lists.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Build {
            root,
            name,
            output,
            compact,
            allow_nested,
            catalog_segment,
        } => commands::build::run(
            root,
            name,
            output,
            compact,
            allow_nested,
            catalog_segment,
            cli.verbose,
        ),

        Commands::Files { root, json } => commands::files::run(root, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
