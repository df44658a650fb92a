//! Built-in violation audits. Each one is a data value, not a type.

use crate::model::AuditDefinition;
use crate::pattern::MatchPattern;
use pagelint_types::{AuditMeta, ids};

pub mod geolocation_on_start;
pub mod no_document_write;
pub mod notification_on_start;
pub mod uses_passive_event_listeners;

/// All built-in audits, in catalog order.
pub fn builtin_audits() -> Vec<AuditDefinition> {
    vec![
        notification_on_start::definition(),
        geolocation_on_start::definition(),
        no_document_write::definition(),
        uses_passive_event_listeners::definition(),
    ]
}

/// Names of the built-in audits, in catalog order.
pub fn builtin_names() -> &'static [&'static str] {
    &[
        ids::AUDIT_NOTIFICATION_ON_START,
        ids::AUDIT_GEOLOCATION_ON_START,
        ids::AUDIT_NO_DOCUMENT_WRITE,
        ids::AUDIT_USES_PASSIVE_EVENT_LISTENERS,
    ]
}

pub fn builtin(name: &str) -> Option<AuditDefinition> {
    match name {
        ids::AUDIT_NOTIFICATION_ON_START => Some(notification_on_start::definition()),
        ids::AUDIT_GEOLOCATION_ON_START => Some(geolocation_on_start::definition()),
        ids::AUDIT_NO_DOCUMENT_WRITE => Some(no_document_write::definition()),
        ids::AUDIT_USES_PASSIVE_EVENT_LISTENERS => {
            Some(uses_passive_event_listeners::definition())
        }
        _ => None,
    }
}

fn console_audit(
    name: &str,
    description: &str,
    failure_description: &str,
    help_text: &str,
    pattern: &'static str,
) -> AuditDefinition {
    let meta = AuditMeta {
        name: name.to_string(),
        description: description.to_string(),
        failure_description: failure_description.to_string(),
        help_text: help_text.to_string(),
        required_artifacts: vec![ids::ARTIFACT_CHROME_CONSOLE_MESSAGES.to_string()],
    };
    let pattern = MatchPattern::new(pattern).expect("built-in audit patterns must be valid");
    AuditDefinition::new(meta, pattern)
}
