//! Fuzz target for schema builds.
//!
//! The input is split into a root field list and a model field list that
//! reference each other, so cycles and odd headers are exercised too.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shapeschema::{BuilderConfig, MemoryFiles, SchemaBuilder};

fuzz_target!(|data: &[u8]| {
    if data.len() > 20_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (root, model) = text.split_once('\u{0}').unwrap_or((text, ""));

    let files = MemoryFiles::new()
        .with_file("Ship.csv", root)
        .with_file("Crew.csv", model)
        .with_file("Catalog/Mode.csv", "Value\nDay\nNight\n");

    let builder = SchemaBuilder::from_files(files, BuilderConfig::default());
    let _ = builder.build("Ship.csv");
});
