//! Config parsing and profile/registry resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.
//! Violation patterns are compiled here, so a malformed pattern is a configuration error and
//! never surfaces mid-evaluation.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{AuditConfig, HeadingConfig, PagelintConfigV1};
pub use presets::{DEFAULT_PROFILE, PROFILE_PERMISSIONS};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `pagelint.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PagelintConfigV1> {
    let cfg: PagelintConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the audits to run: profile preset, then per-audit config, then overrides.
pub fn resolve_config(
    cfg: PagelintConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Resolve every audit the config knows about, ignoring profile and enablement.
pub fn resolve_catalog(cfg: &PagelintConfigV1) -> anyhow::Result<pagelint_domain::AuditRegistry> {
    resolve::resolve_catalog(cfg)
}
