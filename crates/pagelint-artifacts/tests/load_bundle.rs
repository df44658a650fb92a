//! Integration tests for loading artifact bundles from disk.

use camino::Utf8PathBuf;
use pagelint_artifacts::load_bundle;
use pagelint_domain::{AuditError, audits, evaluate};

fn write_bundle(dir: &tempfile::TempDir, text: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("artifacts.json"))
        .expect("temp path should be valid UTF-8");
    std::fs::write(&path, text).expect("write bundle");
    path
}

#[test]
fn loaded_bundle_feeds_evaluation() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_bundle(
        &dir,
        r#"{
  "ChromeConsoleMessages": [
    {"entry": {"source": "violation", "level": "verbose",
               "text": "Only request notification permission in response to a user gesture.",
               "url": "https://a.test/push.js", "lineNumber": 3}}
  ]
}"#,
    );

    let bundle = load_bundle(&path).expect("load");
    let result = evaluate(&bundle, &audits::notification_on_start::definition()).expect("eval");
    assert!(!result.passed());
    assert_eq!(result.evidence()[0].label, "line: 3");
}

#[test]
fn missing_artifact_surfaces_from_loaded_bundle() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_bundle(&dir, r#"{"URL": {"finalUrl": "https://a.test"}}"#);

    let bundle = load_bundle(&path).expect("load");
    let err = evaluate(&bundle, &audits::notification_on_start::definition()).unwrap_err();
    assert!(matches!(err, AuditError::MissingArtifact { .. }));
}

#[test]
fn missing_file_is_an_error_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("nope.json")).expect("utf8");
    let err = load_bundle(&path).unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
}
