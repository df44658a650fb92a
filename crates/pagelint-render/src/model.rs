#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    Fail,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableCellKind {
    Url,
    Text,
    Code,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableColumn {
    pub text: String,
    pub kind: RenderableCellKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableAudit {
    pub name: String,
    pub title: String,
    pub status: RenderableStatus,
    pub columns: Vec<RenderableColumn>,
    /// One entry per evidence row, cells in column order.
    pub rows: Vec<Vec<String>>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableSummary {
    pub audits: u32,
    pub passed: u32,
    pub failed: u32,
    pub errored: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub summary: RenderableSummary,
    pub audits: Vec<RenderableAudit>,
}
