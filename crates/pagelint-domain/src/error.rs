use thiserror::Error;

/// Reasons a single audit cannot produce a verdict.
///
/// None of these is ever converted into a pass.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The record collection is present but structurally invalid.
    #[error("invalid artifact {artifact}: {reason}")]
    Input { artifact: String, reason: String },

    /// The artifact the audit depends on is absent from the bundle.
    #[error("missing required artifact: {artifact}")]
    MissingArtifact { artifact: String },

    /// A violation pattern failed to compile. Raised while registering audits.
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
