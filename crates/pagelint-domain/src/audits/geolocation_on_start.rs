use super::console_audit;
use crate::model::AuditDefinition;
use pagelint_types::ids;

pub fn definition() -> AuditDefinition {
    console_audit(
        ids::AUDIT_GEOLOCATION_ON_START,
        "Avoids requesting the geolocation permission on page load",
        "Requests the geolocation permission on page load",
        "Users are mistrustful of or confused by sites that request their location \
         without context. Consider tying the request to user gestures instead. \
         [Learn more](https://developers.google.com/web/tools/lighthouse/audits/geolocation-on-load).",
        "geolocation",
    )
}
