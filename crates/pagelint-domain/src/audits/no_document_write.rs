use super::console_audit;
use crate::model::AuditDefinition;
use pagelint_types::ids;

pub fn definition() -> AuditDefinition {
    console_audit(
        ids::AUDIT_NO_DOCUMENT_WRITE,
        "Avoids `document.write()`",
        "Uses `document.write()`",
        "For users on slow connections, external scripts dynamically injected via \
         `document.write()` can delay page load by tens of seconds. \
         [Learn more](https://developers.google.com/web/tools/lighthouse/audits/document-write).",
        r"document\.write",
    )
}
