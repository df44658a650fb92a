//! Rendering utilities for human surfaces (Markdown comments, terminals).
//!
//! Renderers take a flattened, dependency-free model so they stay deterministic and
//! independent of the report schema version.

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::{render_markdown, render_table};
pub use model::{
    RenderableAudit, RenderableCellKind, RenderableColumn, RenderableReport, RenderableStatus,
    RenderableSummary,
};
