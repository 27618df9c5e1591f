//! Fuzz target for the row parser.
//!
//! The parser must never panic, whatever the input text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shapeschema::RowParser;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = RowParser::new().parse_str(text);
    }
});
