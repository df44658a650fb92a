use crate::model::ArtifactBundle;
use pagelint_types::ids;
use serde_json::{Value, json};

pub fn bundle_with_records(records: Value) -> ArtifactBundle {
    ArtifactBundle::new().with(ids::ARTIFACT_CHROME_CONSOLE_MESSAGES, records)
}

/// Collector-shaped messages (`{"entry": {...}}`) from `(text, url)` pairs.
pub fn console_messages(entries: &[(&str, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(text, url)| {
                json!({
                    "entry": {
                        "source": ids::SOURCE_VIOLATION,
                        "level": "verbose",
                        "text": text,
                        "url": url,
                    }
                })
            })
            .collect(),
    )
}
