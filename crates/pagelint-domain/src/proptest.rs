//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - extraction keeping exactly the matching records, in input order
//! - verdict and evidence never disagreeing
//! - evaluation being a pure function of its input

use crate::audits::notification_on_start;
use crate::engine::{evaluate, evaluate_records};
use crate::extract::{UNKNOWN_LOCATION, extract};
use crate::model::ArtifactBundle;
use crate::pattern::MatchPattern;
use pagelint_types::{DiagnosticRecord, ids};
use proptest::prelude::*;

const NEEDLE: &str = "notification permission";

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Message text that either embeds the needle or is short noise that cannot contain it.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z ]{0,20}").unwrap(),
        (
            prop::string::string_regex("[A-Za-z ]{0,12}").unwrap(),
            prop::string::string_regex("[A-Za-z .]{0,12}").unwrap(),
        )
            .prop_map(|(pre, post)| format!("{pre}{NEEDLE}{post}")),
    ]
}

fn arb_url() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::string::string_regex("https://[a-z]{1,8}\\.test/[a-z]{0,8}").unwrap(),
    )
}

fn arb_record() -> impl Strategy<Value = DiagnosticRecord> {
    (
        arb_text(),
        arb_url(),
        prop::option::of(0u32..5000),
        prop::option::of(0u32..200),
    )
        .prop_map(|(text, url, line, column)| DiagnosticRecord {
            text,
            url,
            source: Some(ids::SOURCE_VIOLATION.to_string()),
            level: Some("verbose".to_string()),
            line_number: line,
            column_number: line.and(column),
            timestamp: None,
        })
}

fn arb_records() -> impl Strategy<Value = Vec<DiagnosticRecord>> {
    prop::collection::vec(arb_record(), 0..24)
}

// ============================================================================
// Extraction
// ============================================================================

proptest! {
    #[test]
    fn extract_keeps_exactly_matching_records_in_order(records in arb_records()) {
        let pattern = MatchPattern::new(NEEDLE).unwrap();
        let rows = extract(&records, &pattern);

        let expected: Vec<String> = records
            .iter()
            .filter(|r| r.text.contains(NEEDLE))
            .map(|r| r.url.clone().unwrap_or_default())
            .collect();
        let actual: Vec<String> = rows.iter().map(|r| r.url.clone()).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn extract_never_yields_empty_labels(records in arb_records()) {
        let pattern = MatchPattern::new(NEEDLE).unwrap();
        for row in extract(&records, &pattern) {
            prop_assert!(!row.label.is_empty());
        }
    }

    #[test]
    fn records_without_any_position_get_the_generic_label(text in arb_text()) {
        let record = DiagnosticRecord::new(format!("{NEEDLE} {text}"));
        let rows = extract(&[record], &MatchPattern::new(NEEDLE).unwrap());
        prop_assert_eq!(rows.len(), 1);
        prop_assert_eq!(rows[0].label.as_str(), UNKNOWN_LOCATION);
    }

    #[test]
    fn extract_of_empty_input_is_empty(pattern in "[a-z]{1,10}") {
        let pattern = MatchPattern::new(&pattern).unwrap();
        prop_assert!(extract(&[], &pattern).is_empty());
    }
}

// ============================================================================
// Evaluation
// ============================================================================

proptest! {
    #[test]
    fn passed_iff_no_evidence(records in arb_records()) {
        let result = evaluate_records(&records, &notification_on_start::definition());
        prop_assert_eq!(result.passed(), result.evidence().is_empty());
        prop_assert_eq!(&result.table().items[..], result.evidence());
    }

    #[test]
    fn evaluate_is_idempotent(records in arb_records()) {
        let bundle = ArtifactBundle::new().with(
            ids::ARTIFACT_CHROME_CONSOLE_MESSAGES,
            serde_json::to_value(&records).unwrap(),
        );
        let audit = notification_on_start::definition();

        let first = evaluate(&bundle, &audit).unwrap();
        let second = evaluate(&bundle, &audit).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn wrapped_and_bare_encodings_evaluate_identically(records in arb_records()) {
        let bare = serde_json::to_value(&records).unwrap();
        let wrapped = serde_json::Value::Array(
            records
                .iter()
                .map(|r| serde_json::json!({ "entry": r }))
                .collect(),
        );
        let audit = notification_on_start::definition();

        let from_bare = evaluate(
            &ArtifactBundle::new().with(ids::ARTIFACT_CHROME_CONSOLE_MESSAGES, bare),
            &audit,
        )
        .unwrap();
        let from_wrapped = evaluate(
            &ArtifactBundle::new().with(ids::ARTIFACT_CHROME_CONSOLE_MESSAGES, wrapped),
            &audit,
        )
        .unwrap();

        prop_assert_eq!(from_bare, from_wrapped);
    }
}
