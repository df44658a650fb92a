use crate::pattern::MatchPattern;
use pagelint_types::{AuditMeta, ColumnHeading, ItemType, ids};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Pre-collected session data keyed by artifact name.
///
/// An absent artifact and an empty one are different things: the former is an
/// error for audits that require it, the latter simply yields no evidence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactBundle {
    artifacts: BTreeMap<String, Value>,
}

impl ArtifactBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.artifacts.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.artifacts.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for ArtifactBundle {
    fn from(artifacts: BTreeMap<String, Value>) -> Self {
        Self { artifacts }
    }
}

/// One violation audit as plain data: metadata, the artifact it reads, its
/// pattern, and the fixed column set of its evidence table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditDefinition {
    pub meta: AuditMeta,
    /// Artifact holding the diagnostic records.
    pub artifact: String,
    pub pattern: MatchPattern,
    pub headings: Vec<ColumnHeading>,
    /// When set, only records carrying this source tag are considered.
    pub source: Option<String>,
}

impl AuditDefinition {
    /// Audit over `ChromeConsoleMessages` with the standard URL/Location table.
    pub fn new(meta: AuditMeta, pattern: MatchPattern) -> Self {
        let artifact = meta
            .required_artifacts
            .first()
            .cloned()
            .unwrap_or_else(|| ids::ARTIFACT_CHROME_CONSOLE_MESSAGES.to_string());
        Self {
            meta,
            artifact,
            pattern,
            headings: standard_headings(),
            source: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }
}

/// `URL` and `Location` columns, as used by every built-in audit.
pub fn standard_headings() -> Vec<ColumnHeading> {
    vec![
        ColumnHeading::new(ids::FIELD_URL, ItemType::Url, "URL"),
        ColumnHeading::new(ids::FIELD_LABEL, ItemType::Text, "Location"),
    ]
}

/// Explicit, ordered set of audits for one run. Nothing is discovered implicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditRegistry {
    audits: Vec<AuditDefinition>,
}

impl AuditRegistry {
    pub fn new(audits: Vec<AuditDefinition>) -> Self {
        Self { audits }
    }

    /// Every built-in audit, in catalog order.
    pub fn builtin() -> Self {
        Self::new(crate::audits::builtin_audits())
    }

    pub fn get(&self, name: &str) -> Option<&AuditDefinition> {
        self.audits.iter().find(|a| a.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuditDefinition> {
        self.audits.iter()
    }

    pub fn as_slice(&self) -> &[AuditDefinition] {
        &self.audits
    }

    pub fn names(&self) -> Vec<&str> {
        self.audits.iter().map(AuditDefinition::name).collect()
    }

    pub fn len(&self) -> usize {
        self.audits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }
}

impl<'a> IntoIterator for &'a AuditRegistry {
    type Item = &'a AuditDefinition;
    type IntoIter = std::slice::Iter<'a, AuditDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.audits.iter()
    }
}
