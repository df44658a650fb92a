use crate::{
    RenderableAudit, RenderableCellKind, RenderableColumn, RenderableReport, RenderableStatus,
};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Pagelint report\n\n");
    let s = &report.summary;
    out.push_str(&format!(
        "- Audits: {} ({} passed, {} failed, {} errored)\n",
        s.audits, s.passed, s.failed, s.errored
    ));

    if report.audits.is_empty() {
        out.push_str("\nNo audits ran.\n");
        return out;
    }

    for audit in &report.audits {
        out.push('\n');
        render_audit(&mut out, audit);
    }

    out
}

fn render_audit(out: &mut String, audit: &RenderableAudit) {
    let status = match audit.status {
        RenderableStatus::Pass => "PASS",
        RenderableStatus::Fail => "FAIL",
        RenderableStatus::Error => "ERROR",
    };
    out.push_str(&format!("## {} `{}`\n\n{}\n", status, audit.name, audit.title));

    if let Some(err) = &audit.error {
        out.push_str(&format!("\n> {}\n", single_line(err)));
    }

    if audit.status == RenderableStatus::Fail && !audit.rows.is_empty() {
        out.push('\n');
        out.push_str(&render_table(&audit.columns, &audit.rows));
    }
}

/// Markdown table with one header row. Rows are emitted in the order given.
pub fn render_table(columns: &[RenderableColumn], rows: &[Vec<String>]) -> String {
    let mut out = String::new();

    let header: Vec<String> = columns.iter().map(|c| escape(&c.text)).collect();
    out.push_str(&format!("| {} |\n", header.join(" | ")));
    out.push_str(&format!("|{}\n", " --- |".repeat(columns.len())));

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| cell(col.kind, row.get(i).map(String::as_str).unwrap_or_default()))
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    out
}

fn cell(kind: RenderableCellKind, value: &str) -> String {
    if value.is_empty() {
        return "-".to_string();
    }
    match kind {
        RenderableCellKind::Url | RenderableCellKind::Code => {
            format!("`{}`", escape(value).replace('`', "'"))
        }
        RenderableCellKind::Text => escape(value),
    }
}

fn escape(value: &str) -> String {
    single_line(value).replace('|', "\\|")
}

fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
