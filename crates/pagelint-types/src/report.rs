use crate::AuditOutput;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for pagelint run reports.
pub const SCHEMA_REPORT_V1: &str = "pagelint.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Pass,
    Fail,
    /// The audit could not produce a verdict (missing or malformed artifact).
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Per-audit entry in the run report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditEntry {
    pub name: String,
    /// `description` on pass, `failureDescription` on fail or error.
    pub title: String,
    pub help_text: String,
    pub status: AuditStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AuditOutput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counts only; pagelint does not score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RunSummary {
    pub audits: u32,
    pub passed: u32,
    pub failed: u32,
    pub errored: u32,
}

impl RunSummary {
    pub fn from_entries(entries: &[AuditEntry]) -> Self {
        let mut summary = RunSummary {
            audits: entries.len() as u32,
            ..RunSummary::default()
        };
        for entry in entries {
            match entry.status {
                AuditStatus::Pass => summary.passed += 1,
                AuditStatus::Fail => summary.failed += 1,
                AuditStatus::Error => summary.errored += 1,
            }
        }
        summary
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PagelintReport {
    /// Versioned schema identifier for the report shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub summary: RunSummary,
    pub audits: Vec<AuditEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, status: AuditStatus) -> AuditEntry {
        AuditEntry {
            name: name.to_string(),
            title: name.to_string(),
            help_text: String::new(),
            status,
            result: None,
            error: None,
        }
    }

    #[test]
    fn summary_counts_each_status() {
        let entries = vec![
            entry("a", AuditStatus::Pass),
            entry("b", AuditStatus::Fail),
            entry("c", AuditStatus::Fail),
            entry("d", AuditStatus::Error),
        ];
        let summary = RunSummary::from_entries(&entries);
        assert_eq!(
            summary,
            RunSummary {
                audits: 4,
                passed: 1,
                failed: 2,
                errored: 1,
            }
        );
    }

    #[test]
    fn error_entries_omit_result() {
        let mut e = entry("a", AuditStatus::Error);
        e.error = Some("missing artifact".to_string());
        let value = serde_json::to_value(&e).expect("serialize");
        assert!(value.get("result").is_none());
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "missing artifact");
    }
}
