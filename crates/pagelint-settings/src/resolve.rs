use crate::model::{AuditConfig, HeadingConfig, PagelintConfigV1};
use crate::presets;
use anyhow::Context;
use pagelint_domain::{AuditDefinition, AuditRegistry, MatchPattern, audits};
use pagelint_types::{AuditMeta, ColumnHeading, EvidenceRow, ItemType, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    /// Run only these audits (by name), regardless of profile.
    pub only: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub registry: AuditRegistry,
}

pub fn resolve_config(
    cfg: PagelintConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let requested = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());
    let (profile, enabled_by_profile) = presets::enabled_builtins(&requested);

    let known = known_audits(&cfg, enabled_by_profile)?;

    let selected: Vec<AuditDefinition> = if overrides.only.is_empty() {
        known
            .into_iter()
            .filter_map(|(def, enabled)| enabled.then_some(def))
            .collect()
    } else {
        for name in &overrides.only {
            if !known.iter().any(|(def, _)| def.name() == name) {
                anyhow::bail!("unknown audit: {name}");
            }
        }
        known
            .into_iter()
            .filter(|(def, _)| overrides.only.iter().any(|n| n == def.name()))
            .map(|(def, _)| def)
            .collect()
    };

    Ok(ResolvedConfig {
        profile: profile.to_string(),
        registry: AuditRegistry::new(selected),
    })
}

/// Every audit the config knows about, enabled or not: built-ins in catalog order, then
/// custom audits by name.
///
/// `pagelint explain` uses this so that audits switched off by the profile stay documented.
pub fn resolve_catalog(cfg: &PagelintConfigV1) -> anyhow::Result<AuditRegistry> {
    let known = known_audits(cfg, &[])?;
    Ok(AuditRegistry::new(
        known.into_iter().map(|(def, _)| def).collect(),
    ))
}

fn known_audits(
    cfg: &PagelintConfigV1,
    enabled_by_profile: &[&str],
) -> anyhow::Result<Vec<(AuditDefinition, bool)>> {
    // (definition, enabled) for every known audit: built-ins first, in catalog order.
    let mut known: Vec<(AuditDefinition, bool)> = Vec::new();

    for name in audits::builtin_names() {
        let mut def = audits::builtin(name).context("built-in catalog out of sync")?;
        let mut enabled = enabled_by_profile.contains(name);
        if let Some(ac) = cfg.audits.get(*name) {
            apply_overrides(&mut def, ac).with_context(|| format!("audit {name}"))?;
            if let Some(e) = ac.enabled {
                enabled = e;
            }
        }
        known.push((def, enabled));
    }

    // Custom audits, ordered by name (BTreeMap iteration).
    for (name, ac) in cfg.audits.iter() {
        if audits::builtin(name).is_some() {
            continue;
        }
        let def = custom_audit(name, ac).with_context(|| format!("audit {name}"))?;
        known.push((def, ac.enabled.unwrap_or(true)));
    }

    Ok(known)
}

fn apply_overrides(def: &mut AuditDefinition, ac: &AuditConfig) -> anyhow::Result<()> {
    if let Some(pattern) = ac.pattern.as_deref() {
        def.pattern = compile_pattern(pattern)?;
    }
    if let Some(source) = &ac.source {
        def.source = Some(source.clone());
    }
    if let Some(artifact) = &ac.artifact {
        def.artifact = artifact.clone();
        def.meta.required_artifacts = vec![artifact.clone()];
    }
    if let Some(description) = &ac.description {
        def.meta.description = description.clone();
    }
    if let Some(failure_description) = &ac.failure_description {
        def.meta.failure_description = failure_description.clone();
    }
    if let Some(help_text) = &ac.help_text {
        def.meta.help_text = help_text.clone();
    }
    if !ac.headings.is_empty() {
        def.headings = parse_headings(&ac.headings)?;
    }
    Ok(())
}

fn custom_audit(name: &str, ac: &AuditConfig) -> anyhow::Result<AuditDefinition> {
    let Some(pattern) = ac.pattern.as_deref() else {
        anyhow::bail!("not a built-in audit and no `pattern` given");
    };
    let Some(description) = ac.description.clone() else {
        anyhow::bail!("custom audits require a `description`");
    };
    validate_name(name)?;

    let artifact = ac
        .artifact
        .clone()
        .unwrap_or_else(|| ids::ARTIFACT_CHROME_CONSOLE_MESSAGES.to_string());
    let meta = AuditMeta {
        name: name.to_string(),
        failure_description: ac
            .failure_description
            .clone()
            .unwrap_or_else(|| format!("Fails: {description}")),
        description,
        help_text: ac.help_text.clone().unwrap_or_default(),
        required_artifacts: vec![artifact],
    };

    let mut def = AuditDefinition::new(meta, compile_pattern(pattern)?);
    def.source = ac.source.clone();
    if !ac.headings.is_empty() {
        def.headings = parse_headings(&ac.headings)?;
    }
    Ok(def)
}

fn compile_pattern(pattern: &str) -> anyhow::Result<MatchPattern> {
    MatchPattern::new(pattern).context("invalid pattern")
}

fn validate_name(name: &str) -> anyhow::Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        anyhow::bail!("audit names must be kebab-case (a-z, 0-9, '-')");
    }
    Ok(())
}

fn parse_headings(headings: &[HeadingConfig]) -> anyhow::Result<Vec<ColumnHeading>> {
    headings
        .iter()
        .map(|h| {
            if !EvidenceRow::FIELDS.contains(&h.key.as_str()) {
                anyhow::bail!(
                    "unknown heading key: {} (expected one of {})",
                    h.key,
                    EvidenceRow::FIELDS.join("|")
                );
            }
            Ok(ColumnHeading::new(
                &h.key,
                parse_item_type(&h.item_type)?,
                &h.text,
            ))
        })
        .collect()
}

fn parse_item_type(v: &str) -> anyhow::Result<ItemType> {
    match v {
        "url" => Ok(ItemType::Url),
        "text" => Ok(ItemType::Text),
        "code" => Ok(ItemType::Code),
        other => anyhow::bail!("unknown item_type: {other} (expected url|text|code)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    fn resolve(toml: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
        resolve_config(parse_config_toml(toml)?, overrides)
    }

    #[test]
    fn empty_config_enables_every_builtin() {
        let resolved = resolve("", Overrides::default()).expect("resolve");
        assert_eq!(resolved.profile, "default");
        assert_eq!(resolved.registry.names(), audits::builtin_names());
    }

    #[test]
    fn permissions_profile_narrows_builtins() {
        let resolved = resolve("profile = \"permissions\"", Overrides::default()).expect("resolve");
        assert_eq!(
            resolved.registry.names(),
            vec![ids::AUDIT_NOTIFICATION_ON_START, ids::AUDIT_GEOLOCATION_ON_START]
        );
    }

    #[test]
    fn cli_profile_wins_over_config() {
        let overrides = Overrides {
            profile: Some("permissions".to_string()),
            ..Overrides::default()
        };
        let resolved = resolve("profile = \"default\"", overrides).expect("resolve");
        assert_eq!(resolved.profile, "permissions");
    }

    #[test]
    fn builtin_can_be_disabled_and_repatterned() {
        let resolved = resolve(
            r#"
[audits.no-document-write]
enabled = false

[audits.notification-on-start]
pattern = "(?i)notification permission"
source = "violation"
"#,
            Overrides::default(),
        )
        .expect("resolve");

        assert!(resolved.registry.get(ids::AUDIT_NO_DOCUMENT_WRITE).is_none());
        let notification = resolved
            .registry
            .get(ids::AUDIT_NOTIFICATION_ON_START)
            .expect("still enabled");
        assert!(notification.pattern.is_match("NOTIFICATION PERMISSION"));
        assert_eq!(notification.source.as_deref(), Some("violation"));
    }

    #[test]
    fn custom_audit_is_appended_after_builtins() {
        let resolved = resolve(
            r#"
[audits.vibrate-on-start]
pattern = "navigator\\.vibrate"
description = "Avoids vibrating on page load"

[[audits.vibrate-on-start.headings]]
key = "label"
item_type = "code"
text = "Where"
"#,
            Overrides::default(),
        )
        .expect("resolve");

        let names = resolved.registry.names();
        assert_eq!(names.last(), Some(&"vibrate-on-start"));

        let custom = resolved.registry.get("vibrate-on-start").expect("custom");
        assert_eq!(custom.meta.failure_description, "Fails: Avoids vibrating on page load");
        assert_eq!(custom.artifact, ids::ARTIFACT_CHROME_CONSOLE_MESSAGES);
        assert_eq!(
            custom.headings,
            vec![ColumnHeading::new("label", ItemType::Code, "Where")]
        );
    }

    #[test]
    fn malformed_pattern_fails_resolution_with_audit_name() {
        let err = resolve(
            r#"
[audits.notification-on-start]
pattern = "notification (permission"
"#,
            Overrides::default(),
        )
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("audit notification-on-start"), "{msg}");
        assert!(msg.contains("invalid pattern"), "{msg}");
    }

    #[test]
    fn unknown_audit_without_pattern_is_rejected() {
        let err = resolve("[audits.mystery]\nenabled = true\n", Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("no `pattern` given"));
    }

    #[test]
    fn custom_audit_requires_description_and_kebab_name() {
        let err = resolve("[audits.x]\npattern = \"x\"\n", Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("description"));

        let err = resolve(
            "[audits.Bad_Name]\npattern = \"x\"\ndescription = \"d\"\n",
            Overrides::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("kebab-case"));
    }

    #[test]
    fn unknown_heading_key_is_rejected() {
        let err = resolve(
            r#"
[[audits.notification-on-start.headings]]
key = "text"
item_type = "text"
text = "Message"
"#,
            Overrides::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("unknown heading key: text"));
    }

    #[test]
    fn only_selects_named_audits_even_if_profile_disabled() {
        let overrides = Overrides {
            profile: Some("permissions".to_string()),
            only: vec![ids::AUDIT_NO_DOCUMENT_WRITE.to_string()],
        };
        let resolved = resolve("", overrides).expect("resolve");
        assert_eq!(resolved.registry.names(), vec![ids::AUDIT_NO_DOCUMENT_WRITE]);
    }

    #[test]
    fn only_rejects_unknown_names() {
        let overrides = Overrides {
            only: vec!["nope".to_string()],
            ..Overrides::default()
        };
        let err = resolve("", overrides).unwrap_err();
        assert!(err.to_string().contains("unknown audit: nope"));
    }

    #[test]
    fn catalog_includes_disabled_and_custom_audits() {
        let cfg = parse_config_toml(
            r#"
profile = "permissions"

[audits.no-document-write]
enabled = false

[audits.vibrate-on-start]
pattern = "vibrate"
description = "Avoids vibrating on page load"
enabled = false
"#,
        )
        .expect("parse");
        let catalog = resolve_catalog(&cfg).expect("catalog");
        assert_eq!(
            catalog.names(),
            vec![
                ids::AUDIT_NOTIFICATION_ON_START,
                ids::AUDIT_GEOLOCATION_ON_START,
                ids::AUDIT_NO_DOCUMENT_WRITE,
                ids::AUDIT_USES_PASSIVE_EVENT_LISTENERS,
                "vibrate-on-start",
            ]
        );
    }
}
