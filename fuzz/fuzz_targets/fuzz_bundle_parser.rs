//! Fuzz target for artifact bundle parsing and record decoding.
//!
//! Goal: loading a bundle should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_bundle_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = pagelint_artifacts::fuzz::parse_and_decode(text);
    }
});
