//! Render use cases: markdown from in-memory reports.

use pagelint_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    pagelint_render::render_markdown(report)
}
