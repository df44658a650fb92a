//! Artifact adapters: read a collected artifact bundle from disk.
//!
//! This crate is allowed to do filesystem IO. It does not interpret artifacts beyond
//! requiring a top-level JSON object; record validation belongs to the audits that read them.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::Utf8Path;
use pagelint_domain::ArtifactBundle;
use serde_json::Value;
use std::collections::BTreeMap;

/// Parse a bundle from JSON text: an object mapping artifact names to values.
pub fn parse_bundle(text: &str) -> anyhow::Result<ArtifactBundle> {
    let value: Value = serde_json::from_str(text).context("parse artifact bundle json")?;
    let Value::Object(map) = value else {
        anyhow::bail!("artifact bundle must be a JSON object keyed by artifact name");
    };
    Ok(map.into_iter().collect::<BTreeMap<_, _>>().into())
}

/// Read and parse a bundle file.
pub fn load_bundle(path: &Utf8Path) -> anyhow::Result<ArtifactBundle> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read artifacts: {path}"))?;
    let bundle = parse_bundle(&text).with_context(|| format!("load artifacts: {path}"))?;
    tracing::debug!(
        path = %path,
        artifacts = ?bundle.names().collect::<Vec<_>>(),
        "loaded artifact bundle"
    );
    Ok(bundle)
}

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a bundle and decode every artifact as a record collection.
    ///
    /// Returns `Ok(...)` on valid JSON objects, `Err(...)` otherwise. **Never panics** on any input.
    pub fn parse_and_decode(text: &str) -> anyhow::Result<usize> {
        let bundle = super::parse_bundle(text)?;
        let mut decoded = 0;
        for name in bundle.names() {
            if let Some(value) = bundle.get(name)
                && let Ok(records) = pagelint_domain::decode_records(name, value)
            {
                decoded += records.len();
            }
        }
        Ok(decoded)
    }
}
