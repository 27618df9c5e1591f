//! Files command - list the project's file index.

use std::path::PathBuf;

use colored::Colorize;
use shapeschema::{DiskFiles, ProjectFiles};

pub fn run(root: PathBuf, json_output: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let files = DiskFiles::new(&root)?;
    let index = files.index()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    for path in index.iter() {
        println!("{}", path);
    }
    eprintln!(
        "{} {} files under {}",
        "Indexed".cyan().bold(),
        index.len().to_string().white().bold(),
        root.display()
    );

    Ok(())
}
