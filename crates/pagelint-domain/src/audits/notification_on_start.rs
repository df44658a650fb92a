//! Pages that ask for the notification permission without a user gesture.

use super::console_audit;
use crate::model::AuditDefinition;
use pagelint_types::ids;

pub fn definition() -> AuditDefinition {
    console_audit(
        ids::AUDIT_NOTIFICATION_ON_START,
        "Avoids requesting the notification permission on page load",
        "Requests the notification permission on page load",
        "Users are mistrustful of or confused by sites that request to send \
         notifications without context. Consider tying the request to user gestures \
         instead. [Learn more](https://developers.google.com/web/tools/lighthouse/audits/notifications-on-load).",
        "notification permission",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_chrome_violation_text() {
        let def = definition();
        assert!(def.pattern.is_match(
            "Only request notification permission in response to a user gesture."
        ));
        assert!(
            !def.pattern
                .is_match("Only request geolocation information in response to a user gesture.")
        );
    }
}
