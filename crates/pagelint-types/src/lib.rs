//! Stable DTOs and IDs used across the pagelint workspace.
//!
//! This crate is intentionally boring:
//! - the diagnostic record shape produced by the collector
//! - evidence rows, table details, and the per-audit output contract
//! - audit metadata and the emitted run report
//! - stable string IDs for built-in audits and artifacts

#![forbid(unsafe_code)]

pub mod details;
pub mod ids;
pub mod meta;
pub mod record;
pub mod report;

pub use details::{
    AuditOutput, ColumnHeading, DetailsKind, EvidenceRow, ExtendedInfo, ItemType, TableDetails,
};
pub use meta::AuditMeta;
pub use record::{ConsoleMessage, DiagnosticRecord};
pub use report::{
    AuditEntry, AuditStatus, PagelintReport, RunSummary, SCHEMA_REPORT_V1, ToolMeta,
};
