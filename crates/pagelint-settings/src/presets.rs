use pagelint_types::ids;

pub const DEFAULT_PROFILE: &str = "default";
pub const PROFILE_PERMISSIONS: &str = "permissions";

/// Preset profiles decide which built-in audits are enabled before per-audit config applies.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn enabled_builtins(profile: &str) -> (&'static str, &'static [&'static str]) {
    match profile {
        PROFILE_PERMISSIONS => (PROFILE_PERMISSIONS, permission_prompts()),
        // default
        _ => (DEFAULT_PROFILE, pagelint_domain::audits::builtin_names()),
    }
}

fn permission_prompts() -> &'static [&'static str] {
    &[
        ids::AUDIT_NOTIFICATION_ON_START,
        ids::AUDIT_GEOLOCATION_ON_START,
    ]
}
