use crate::error::AuditError;
use crate::extract::{decode_records, extract_where};
use crate::model::{ArtifactBundle, AuditDefinition};
use pagelint_types::{
    AuditOutput, ColumnHeading, DiagnosticRecord, EvidenceRow, ExtendedInfo, TableDetails,
};

/// Verdict plus evidence for one audit run.
///
/// `passed` is derived from the evidence at construction, so the two can never
/// disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditResult {
    passed: bool,
    evidence: Vec<EvidenceRow>,
    table: TableDetails,
}

impl AuditResult {
    pub fn new(headings: &[ColumnHeading], evidence: Vec<EvidenceRow>) -> Self {
        let table = TableDetails::new(headings.to_vec(), evidence.clone());
        Self {
            passed: evidence.is_empty(),
            evidence,
            table,
        }
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn evidence(&self) -> &[EvidenceRow] {
        &self.evidence
    }

    pub fn table(&self) -> &TableDetails {
        &self.table
    }

    /// Consumer shape: `rawValue` aliases `passed`, `extendedInfo.value` echoes the evidence.
    pub fn to_output(&self) -> AuditOutput {
        self.clone().into()
    }
}

impl From<AuditResult> for AuditOutput {
    fn from(result: AuditResult) -> Self {
        AuditOutput {
            raw_value: result.passed,
            extended_info: ExtendedInfo {
                value: result.evidence,
            },
            details: result.table,
        }
    }
}

/// Evaluate one audit against a bundle.
///
/// Fails with [`AuditError::MissingArtifact`] when the audit's artifact is absent
/// and [`AuditError::Input`] when it is not a record collection. No partial
/// result is produced on error.
pub fn evaluate(
    artifacts: &ArtifactBundle,
    audit: &AuditDefinition,
) -> Result<AuditResult, AuditError> {
    let raw = artifacts
        .get(&audit.artifact)
        .ok_or_else(|| AuditError::MissingArtifact {
            artifact: audit.artifact.clone(),
        })?;
    let records = decode_records(&audit.artifact, raw)?;
    Ok(evaluate_records(&records, audit))
}

/// Evaluate one audit over already-decoded records.
pub fn evaluate_records(records: &[DiagnosticRecord], audit: &AuditDefinition) -> AuditResult {
    let evidence = extract_where(records, &audit.pattern, audit.source.as_deref());
    AuditResult::new(&audit.headings, evidence)
}
