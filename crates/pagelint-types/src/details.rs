use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Semantic type of a table column, used by renderers to pick a cell style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Url,
    Text,
    Code,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeading {
    /// Evidence row field the column reads (`url` or `label`).
    pub key: String,
    pub item_type: ItemType,
    /// Display text for the column header.
    pub text: String,
}

impl ColumnHeading {
    pub fn new(key: &str, item_type: ItemType, text: &str) -> Self {
        Self {
            key: key.to_string(),
            item_type,
            text: text.to_string(),
        }
    }
}

/// One matching diagnostic record reduced to `(url, label)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceRow {
    /// Resource associated with the violation; empty when unknown.
    pub url: String,
    /// One-line locator such as `app.js:10:5` or `line: 12`.
    pub label: String,
}

impl EvidenceRow {
    /// Field names a [`ColumnHeading::key`] may reference.
    pub const FIELDS: &'static [&'static str] = &[ids::FIELD_URL, ids::FIELD_LABEL];

    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            ids::FIELD_URL => Some(&self.url),
            ids::FIELD_LABEL => Some(&self.label),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DetailsKind {
    #[default]
    Table,
}

/// Column headings paired with the evidence rows, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableDetails {
    #[serde(rename = "type", default)]
    pub kind: DetailsKind,
    pub headings: Vec<ColumnHeading>,
    pub items: Vec<EvidenceRow>,
}

impl TableDetails {
    pub fn new(headings: Vec<ColumnHeading>, items: Vec<EvidenceRow>) -> Self {
        Self {
            kind: DetailsKind::Table,
            headings,
            items,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtendedInfo {
    pub value: Vec<EvidenceRow>,
}

/// Machine-readable per-audit output handed to report consumers.
///
/// `rawValue` is the pass/fail verdict and `extendedInfo.value` echoes the raw
/// evidence independently of the rendered `details` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutput {
    pub raw_value: bool,
    pub extended_info: ExtendedInfo,
    pub details: TableDetails,
}
