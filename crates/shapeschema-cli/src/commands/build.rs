//! Build command - generate a JSON Schema from a root CSV file.

use std::path::PathBuf;

use colored::Colorize;
use shapeschema::{BuildOutcome, BuilderConfig, ResolverConfig, SchemaBuilder};

pub fn run(
    root: PathBuf,
    name: String,
    output: Option<PathBuf>,
    compact: bool,
    allow_nested: Vec<String>,
    catalog_segment: String,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut resolver = ResolverConfig::default().with_catalog_segment(catalog_segment);
    if !allow_nested.is_empty() {
        resolver = resolver.with_nested_references(&allow_nested);
    }
    let config = BuilderConfig {
        resolver,
        ..BuilderConfig::default()
    };

    let builder = SchemaBuilder::with_config(&root, config)?;

    let doc = match builder.build(&name)? {
        BuildOutcome::Nothing => {
            println!("{}", shapeschema::NOTHING_TO_BUILD);
            return Ok(());
        }
        BuildOutcome::Schema(doc) => doc,
    };

    let Some(output_path) = output else {
        if compact {
            println!("{}", serde_json::to_string(&doc)?);
        } else {
            println!("{}", doc.to_json_pretty()?);
        }
        return Ok(());
    };

    doc.save(&output_path)?;

    println!(
        "{} {} ({} properties)",
        "Built".green().bold(),
        name.white(),
        doc.properties.len().to_string().white().bold()
    );
    if verbose {
        for (property, value) in &doc.properties {
            let kind = value
                .schema
                .kind
                .map(|k| format!("{:?}", k).to_lowercase())
                .unwrap_or_else(|| "-".to_string());
            println!("  {:24} {}", property, kind.yellow());
        }
    }
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
