use super::console_audit;
use crate::model::AuditDefinition;
use pagelint_types::ids;

pub fn definition() -> AuditDefinition {
    console_audit(
        ids::AUDIT_USES_PASSIVE_EVENT_LISTENERS,
        "Uses passive listeners to improve scrolling performance",
        "Does not use passive listeners to improve scrolling performance",
        "Consider marking your touch and wheel event listeners as `passive` to improve \
         your page's scroll performance. \
         [Learn more](https://developers.google.com/web/tools/lighthouse/audits/passive-event-listeners).",
        "passive event listener",
    )
}
