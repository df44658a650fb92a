//! Pure audit evaluation (no IO).
//!
//! Input: an artifact bundle collected elsewhere plus explicit audit definitions.
//! Output: per-audit verdicts with evidence tables.

#![forbid(unsafe_code)]

pub mod audits;
pub mod error;
pub mod extract;
pub mod model;
pub mod pattern;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{AuditResult, evaluate, evaluate_records};
pub use error::AuditError;
pub use extract::{decode_records, extract};
pub use model::{ArtifactBundle, AuditDefinition, AuditRegistry};
pub use pattern::MatchPattern;
