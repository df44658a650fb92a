use anyhow::Context;
use pagelint_render::{
    RenderableAudit, RenderableCellKind, RenderableColumn, RenderableReport, RenderableStatus,
    RenderableSummary,
};
use pagelint_types::{
    AuditEntry, AuditStatus, ItemType, PagelintReport, RunSummary, SCHEMA_REPORT_V1, ToolMeta,
    ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<PagelintReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse pagelint report")
}

pub fn serialize_report(report: &PagelintReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &PagelintReport) -> RenderableReport {
    RenderableReport {
        summary: RenderableSummary {
            audits: report.summary.audits,
            passed: report.summary.passed,
            failed: report.summary.failed,
            errored: report.summary.errored,
        },
        audits: report.audits.iter().map(renderable_audit).collect(),
    }
}

fn renderable_audit(entry: &AuditEntry) -> RenderableAudit {
    let (columns, rows) = match &entry.result {
        Some(output) => {
            let headings = &output.details.headings;
            let columns = headings
                .iter()
                .map(|h| RenderableColumn {
                    text: h.text.clone(),
                    kind: match h.item_type {
                        ItemType::Url => RenderableCellKind::Url,
                        ItemType::Text => RenderableCellKind::Text,
                        ItemType::Code => RenderableCellKind::Code,
                    },
                })
                .collect();
            let rows = output
                .details
                .items
                .iter()
                .map(|row| {
                    headings
                        .iter()
                        .map(|h| row.field(&h.key).unwrap_or_default().to_string())
                        .collect()
                })
                .collect();
            (columns, rows)
        }
        None => (Vec::new(), Vec::new()),
    };

    RenderableAudit {
        name: entry.name.clone(),
        title: entry.title.clone(),
        status: match entry.status {
            AuditStatus::Pass => RenderableStatus::Pass,
            AuditStatus::Fail => RenderableStatus::Fail,
            AuditStatus::Error => RenderableStatus::Error,
        },
        columns,
        rows,
        error: entry.error.clone(),
    }
}

/// Report emitted when the run itself fails (bad config, unreadable artifacts).
///
/// It carries a single errored entry so consumers never mistake it for a clean run.
pub fn runtime_error_report(message: &str) -> PagelintReport {
    let now = OffsetDateTime::now_utc();
    let audits = vec![AuditEntry {
        name: ids::AUDIT_TOOL_RUNTIME.to_string(),
        title: "pagelint could not complete the run".to_string(),
        help_text: String::new(),
        status: AuditStatus::Error,
        result: None,
        error: Some(message.to_string()),
    }];

    PagelintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pagelint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        summary: RunSummary::from_entries(&audits),
        audits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelint_domain::{ArtifactBundle, AuditRegistry, audits};
    use serde_json::json;

    fn sample_report() -> PagelintReport {
        let bundle = ArtifactBundle::new().with(
            ids::ARTIFACT_CHROME_CONSOLE_MESSAGES,
            json!([{ "text": "notification permission (push.js:3:9)", "url": "https://a.test" }]),
        );
        let registry = AuditRegistry::new(vec![
            audits::notification_on_start::definition(),
            audits::no_document_write::definition(),
        ]);
        let entries = crate::evaluate_registry(&registry, &bundle);
        let now = OffsetDateTime::now_utc();
        PagelintReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "pagelint".to_string(),
                version: "0.0.0".to_string(),
            },
            started_at: now,
            finished_at: now,
            summary: RunSummary::from_entries(&entries),
            audits: entries,
        }
    }

    #[test]
    fn serialize_then_parse_preserves_audits() {
        let report = sample_report();
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed.audits, report.audits);
        assert_eq!(parsed.summary, report.summary);
    }

    #[test]
    fn parse_rejects_foreign_schema() {
        let err = parse_report_json(r#"{"schema": "lintkit.report.v9"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn renderable_rows_follow_heading_order() {
        let renderable = to_renderable(&sample_report());
        let failing = &renderable.audits[0];
        assert_eq!(failing.status, RenderableStatus::Fail);
        assert_eq!(failing.columns.len(), 2);
        assert_eq!(
            failing.rows,
            vec![vec!["https://a.test".to_string(), "push.js:3:9".to_string()]]
        );

        let passing = &renderable.audits[1];
        assert_eq!(passing.status, RenderableStatus::Pass);
        assert!(passing.rows.is_empty());
    }

    #[test]
    fn runtime_error_report_is_errored() {
        let report = runtime_error_report("read artifacts: nope.json");
        assert_eq!(report.summary.errored, 1);
        assert_eq!(report.audits[0].name, ids::AUDIT_TOOL_RUNTIME);
        assert_eq!(
            report.audits[0].error.as_deref(),
            Some("read artifacts: nope.json")
        );
    }
}
