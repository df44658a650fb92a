//! The `run` use case: resolve audits, evaluate them against a bundle, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use pagelint_domain::{ArtifactBundle, AuditDefinition, AuditError, AuditRegistry, AuditResult};
use pagelint_settings::{Overrides, ResolvedConfig};
use pagelint_types::{
    AuditEntry, AuditStatus, PagelintReport, RunSummary, SCHEMA_REPORT_V1, ToolMeta,
};
use rayon::prelude::*;
use time::OffsetDateTime;

/// Input for the run use case.
#[derive(Clone, Debug)]
pub struct RunInput<'a> {
    /// Artifact bundle JSON collected from the browser session.
    pub artifacts_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the run use case.
#[derive(Clone, Debug)]
pub struct RunOutput {
    pub report: PagelintReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the audit use case: parse config, load artifacts, evaluate every audit, produce a report.
pub fn run_audits(input: RunInput<'_>) -> anyhow::Result<RunOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        pagelint_settings::PagelintConfigV1::default()
    } else {
        pagelint_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = pagelint_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let bundle =
        pagelint_artifacts::load_bundle(input.artifacts_path).context("load artifact bundle")?;

    let audits = evaluate_registry(&resolved.registry, &bundle);
    let summary = RunSummary::from_entries(&audits);
    tracing::info!(
        profile = %resolved.profile,
        audits = summary.audits,
        passed = summary.passed,
        failed = summary.failed,
        errored = summary.errored,
        "audit run finished"
    );

    let report = PagelintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pagelint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        summary,
        audits,
    };

    Ok(RunOutput {
        report,
        resolved_config: resolved,
    })
}

/// Evaluate every audit independently, in registry order.
///
/// An audit that cannot be evaluated yields an `error` entry; it never passes and never
/// stops the remaining audits.
pub fn evaluate_registry(registry: &AuditRegistry, bundle: &ArtifactBundle) -> Vec<AuditEntry> {
    registry
        .as_slice()
        .par_iter()
        .map(|audit| entry_for(audit, pagelint_domain::evaluate(bundle, audit)))
        .collect()
}

fn entry_for(audit: &AuditDefinition, outcome: Result<AuditResult, AuditError>) -> AuditEntry {
    match outcome {
        Ok(result) => {
            let passed = result.passed();
            tracing::debug!(
                audit = %audit.name(),
                passed,
                evidence = result.evidence().len(),
                "audit evaluated"
            );
            AuditEntry {
                name: audit.meta.name.clone(),
                title: audit.meta.title(passed).to_string(),
                help_text: audit.meta.help_text.clone(),
                status: if passed {
                    AuditStatus::Pass
                } else {
                    AuditStatus::Fail
                },
                result: Some(result.into()),
                error: None,
            }
        }
        Err(err) => {
            tracing::warn!(audit = %audit.name(), error = %err, "audit could not be evaluated");
            AuditEntry {
                name: audit.meta.name.clone(),
                title: audit.meta.failure_description.clone(),
                help_text: audit.meta.help_text.clone(),
                status: AuditStatus::Error,
                result: None,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Map a report to an exit code: 0 = all passed, 2 = any failed, 1 = errored without failures.
pub fn report_exit_code(report: &PagelintReport) -> i32 {
    if report.summary.failed > 0 {
        2
    } else if report.summary.errored > 0 {
        1
    } else {
        0
    }
}
