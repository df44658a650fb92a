//! Violation extractor: select matching diagnostic records and reduce each to
//! `(url, label)` evidence.

use crate::error::AuditError;
use crate::pattern::MatchPattern;
use pagelint_types::{ConsoleMessage, DiagnosticRecord, EvidenceRow};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Label used when neither the text nor the record carries a position.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// `<resource>:<line>` or `<resource>:<line>:<column>`, anchored to a whole token.
static POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<resource>.+?):(?P<line>\d+)(?::(?P<column>\d+))?$")
        .expect("position regex is valid")
});

const TOKEN_WRAPPERS: &[char] = &['(', ')', '[', ']', '<', '>', ',', ';', '"', '\''];

/// Evidence for every record whose text matches `pattern`, in input order.
pub fn extract(records: &[DiagnosticRecord], pattern: &MatchPattern) -> Vec<EvidenceRow> {
    extract_where(records, pattern, None)
}

/// Like [`extract`], additionally requiring `record.source == source` when given.
pub fn extract_where(
    records: &[DiagnosticRecord],
    pattern: &MatchPattern,
    source: Option<&str>,
) -> Vec<EvidenceRow> {
    records
        .iter()
        .filter(|r| source.is_none_or(|s| r.source.as_deref() == Some(s)))
        .filter(|r| pattern.is_match(&r.text))
        .map(evidence_for)
        .collect()
}

/// Decode a raw artifact into records.
///
/// The artifact must be an array; each element must be a record, bare or
/// wrapped as `{"entry": ...}`. An empty array is valid.
pub fn decode_records(artifact: &str, value: &Value) -> Result<Vec<DiagnosticRecord>, AuditError> {
    let Some(items) = value.as_array() else {
        return Err(AuditError::Input {
            artifact: artifact.to_string(),
            reason: format!(
                "expected an array of diagnostic records, found {}",
                kind_of(value)
            ),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            ConsoleMessage::deserialize(item)
                .map(ConsoleMessage::into_record)
                .map_err(|err| AuditError::Input {
                    artifact: artifact.to_string(),
                    reason: format!("record {index}: {err}"),
                })
        })
        .collect()
}

fn evidence_for(record: &DiagnosticRecord) -> EvidenceRow {
    EvidenceRow {
        url: record
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or_default()
            .to_string(),
        label: label_for(record),
    }
}

/// Best-effort locator for a record.
///
/// 1. first `resource:line[:column]` token embedded in the text
/// 2. the structured `lineNumber` / `columnNumber`
/// 3. [`UNKNOWN_LOCATION`]
pub fn label_for(record: &DiagnosticRecord) -> String {
    if let Some(label) = embedded_position(&record.text) {
        return label;
    }
    match (record.line_number, record.column_number) {
        (Some(line), Some(column)) => format!("line: {line}, column: {column}"),
        (Some(line), None) => format!("line: {line}"),
        _ => UNKNOWN_LOCATION.to_string(),
    }
}

fn embedded_position(text: &str) -> Option<String> {
    text.split_whitespace().find_map(|raw| {
        let token = raw
            .trim_start_matches(TOKEN_WRAPPERS)
            .trim_end_matches(|c: char| TOKEN_WRAPPERS.contains(&c) || c == '.');
        let caps = POSITION.captures(token)?;
        let resource = caps.name("resource")?.as_str();
        // Rules out clock times and bare `word:12` fragments.
        if !resource.contains(['.', '/']) {
            return None;
        }
        let line = caps.name("line")?.as_str();
        Some(match caps.name("column") {
            Some(column) => format!("{resource}:{line}:{}", column.as_str()),
            None => format!("{resource}:{line}"),
        })
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
