use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static descriptive metadata every audit declares.
///
/// This is data, not behavior: report renderers and `pagelint explain` read it,
/// the evaluator never computes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    /// Unique kebab-case audit name.
    pub name: String,
    /// Neutral description, shown when the audit passes.
    pub description: String,
    /// Shown when the audit fails.
    pub failure_description: String,
    /// Explanatory text (Markdown links allowed).
    pub help_text: String,
    /// Artifacts the audit reads from the bundle.
    pub required_artifacts: Vec<String>,
}

impl AuditMeta {
    /// Title for a verdict: the failure description when failed, the description otherwise.
    pub fn title(&self, passed: bool) -> &str {
        if passed {
            &self.description
        } else {
            &self.failure_description
        }
    }
}
