use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One runtime message captured by the collector during a browser session.
///
/// Records are read-only input: nothing in pagelint mutates or persists them.
/// Unknown fields are tolerated so collectors can evolve independently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    /// Message payload. May embed a resource and a `line:column` position.
    pub text: String,

    /// Resource the message originated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Category tag (`violation`, `console-api`, `javascript`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Raw level as reported by the browser (`verbose`, `info`, `warning`, `error`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

impl DiagnosticRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_line(mut self, line: u32, column: Option<u32>) -> Self {
        self.line_number = Some(line);
        self.column_number = column;
        self
    }
}

/// Collector wire shape: either a bare record or one wrapped in `{"entry": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ConsoleMessage {
    Wrapped { entry: DiagnosticRecord },
    Bare(DiagnosticRecord),
}

impl ConsoleMessage {
    pub fn into_record(self) -> DiagnosticRecord {
        match self {
            ConsoleMessage::Wrapped { entry } => entry,
            ConsoleMessage::Bare(record) => record,
        }
    }
}
