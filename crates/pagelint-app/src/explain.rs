//! The `explain` use case: describe an audit from its declared metadata.

use pagelint_domain::{AuditDefinition, AuditRegistry};
use pagelint_types::AuditMeta;

/// Everything `pagelint explain` shows about one audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    pub meta: AuditMeta,
    pub pattern: String,
    pub artifact: String,
    pub source: Option<String>,
}

impl From<&AuditDefinition> for Explanation {
    fn from(def: &AuditDefinition) -> Self {
        Self {
            meta: def.meta.clone(),
            pattern: def.pattern.to_string(),
            artifact: def.artifact.clone(),
            source: def.source.clone(),
        }
    }
}

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an audit with this name.
    Found(Explanation),
    /// Unknown name; includes the audits that are available.
    NotFound {
        identifier: String,
        available: Vec<String>,
    },
}

/// Look up an audit by name in the given registry.
pub fn run_explain(identifier: &str, registry: &AuditRegistry) -> ExplainOutput {
    match registry.get(identifier) {
        Some(def) => ExplainOutput::Found(Explanation::from(def)),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: registry.names().into_iter().map(str::to_string).collect(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(&exp.meta.description);
    out.push('\n');
    out.push_str(&"=".repeat(exp.meta.description.chars().count()));
    out.push_str("\n\n");
    out.push_str(&format!("Audit:     {}\n", exp.meta.name));
    out.push_str(&format!("Fails as:  {}\n", exp.meta.failure_description));
    out.push_str(&format!("Reads:     {}\n", exp.artifact));
    out.push_str(&format!("Pattern:   {}\n", exp.pattern));
    if let Some(source) = &exp.source {
        out.push_str(&format!("Source:    {}\n", source));
    }
    if !exp.meta.help_text.is_empty() {
        out.push('\n');
        out.push_str(&exp.meta.help_text);
        out.push('\n');
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, available: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown audit: {}\n\n", identifier));
    out.push_str("Available audits:\n");
    for name in available {
        out.push_str(&format!("  - {}\n", name));
    }

    out
}
