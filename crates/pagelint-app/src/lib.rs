//! Use case orchestration for pagelint.
//!
//! This crate provides the application layer: use cases that coordinate the settings, artifact,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod render;
mod report;
mod run;

pub use explain::{ExplainOutput, Explanation, format_explanation, format_not_found, run_explain};
pub use render::render_markdown;
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use run::{RunInput, RunOutput, evaluate_registry, report_exit_code, run_audits};
