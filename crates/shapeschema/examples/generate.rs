//! Example: Generate a schema from a content-model directory.
//!
//! Usage:
//!   cargo run --example generate -- <root_dir> <schema_name>
//!
//! Example:
//!   cargo run --example generate -- content-model Ship.csv

use std::env;

use shapeschema::{BuildOutcome, SchemaBuilder};

fn main() -> shapeschema::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example generate -- <root_dir> <schema_name>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example generate -- content-model Ship.csv");
        std::process::exit(1);
    }

    let builder = SchemaBuilder::new(&args[1])?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Schema: {} (from {})", args[2], args[1]);
    println!("{}", separator);
    println!();

    let index = builder.file_index()?;
    println!("## File Index ({} files)", index.len());
    for path in index.iter() {
        println!("  {}", path);
    }
    println!();

    match builder.build(&args[2])? {
        BuildOutcome::Nothing => println!("{}", shapeschema::NOTHING_TO_BUILD),
        BuildOutcome::Schema(doc) => {
            println!("## Properties ({})", doc.properties.len());
            for (name, property) in &doc.properties {
                let kind = property
                    .schema
                    .kind
                    .map(|k| format!("{:?}", k).to_lowercase())
                    .unwrap_or_else(|| "-".to_string());
                println!("  {:24} {}", name, kind);
            }
            println!();
            println!("{}", doc.to_json_pretty()?);
        }
    }

    Ok(())
}
