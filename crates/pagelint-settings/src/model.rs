use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `pagelint.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PagelintConfigV1 {
    /// Optional schema string for tooling (`pagelint.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset selecting which built-in audits run: `default` or `permissions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Map of audit name -> config. Names that are not built in define custom audits.
    #[serde(default)]
    pub audits: BTreeMap<String, AuditConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditConfig {
    /// Override the profile's enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Violation regex. Required for custom audits, replaces the built-in one otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Only consider records with this source tag (e.g. `violation`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Artifact holding the records (default `ChromeConsoleMessages`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    /// Evidence table columns (default: URL and Location).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<HeadingConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeadingConfig {
    /// Evidence field: `url` or `label`.
    pub key: String,
    /// `url`, `text`, or `code`.
    pub item_type: String,
    pub text: String,
}
