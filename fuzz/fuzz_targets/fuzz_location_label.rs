//! Fuzz target for the location label heuristic.
//!
//! Goal: every record gets a non-empty label and extraction never panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_location_label
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagelint_domain::MatchPattern;
use pagelint_domain::extract::{extract, label_for};
use pagelint_types::DiagnosticRecord;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    url: Option<String>,
    line: Option<u32>,
    column: Option<u32>,
    needle: String,
}

fuzz_target!(|input: Input| {
    let mut record = DiagnosticRecord::new(input.text);
    if let Some(line) = input.line {
        record = record.with_line(line, input.column);
    }
    if let Some(url) = input.url {
        record = record.with_url(url);
    }

    assert!(!label_for(&record).is_empty());

    let Ok(pattern) = MatchPattern::literal(&input.needle) else {
        return;
    };
    let evidence = extract(std::slice::from_ref(&record), &pattern);
    assert!(evidence.len() <= 1);
});
