//! Developer tasks (schema generation, golden fixture updates, catalog checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_default());

    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(pagelint_types::PagelintReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(pagelint_settings::PagelintConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "pagelint.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "pagelint.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Fixture directories under tests/fixtures that carry an artifact bundle, sorted.
fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(fixtures_dir()).context("Failed to read tests/fixtures/")? {
        let path = entry?.path();
        if path.join("artifacts.json").exists() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn fixture_name(dir: &std::path::Path) -> String {
    dir.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Check every golden report against the generated report schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("schema to json")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;
    println!("✓ pagelint.report.v1 schema compiles");

    let mut count = 0;
    let mut errors = Vec::new();

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);
        let path = dir.join("expected.report.json");
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

        // Golden placeholders are not rfc3339; swap in a real instant before validating.
        for key in ["started_at", "finished_at"] {
            if let Some(v) = value.get_mut(key) {
                *v = serde_json::Value::String("2026-01-01T00:00:00Z".to_string());
            }
        }

        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }

        let parsed = pagelint_app::parse_report_json(&value.to_string());
        if let Err(err) = parsed {
            errors.push(format!("{}: does not parse as a report: {:#}", name, err));
        }

        count += 1;
        println!("  ✓ {} checked", name);
    }

    if count == 0 {
        bail!("No fixtures found in {}", fixtures_dir().display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} golden reports conform!", count);
    Ok(())
}

/// Regenerate `expected.report.json` for every fixture by running the audits in-process.
fn update_fixtures() -> anyhow::Result<()> {
    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);
        let dir = Utf8PathBuf::from_path_buf(dir)
            .map_err(|p| anyhow::anyhow!("non UTF-8 fixture path: {}", p.display()))?;

        let config_path = dir.join("pagelint.toml");
        let config_text = if config_path.exists() {
            fs::read_to_string(&config_path).with_context(|| format!("read {config_path}"))?
        } else {
            String::new()
        };

        let artifacts_path = dir.join("artifacts.json");
        let output = pagelint_app::run_audits(pagelint_app::RunInput {
            artifacts_path: &artifacts_path,
            config_text: &config_text,
            overrides: pagelint_settings::Overrides::default(),
        })
        .with_context(|| format!("fixture '{name}'"))?;

        let value = serde_json::to_value(&output.report).context("report to json")?;
        let normalized = pagelint_test_util::normalize_nondeterministic(value);
        let mut json = serde_json::to_string_pretty(&normalized).context("serialize report")?;
        json.push('\n');

        let golden = dir.join("expected.report.json");
        fs::write(&golden, json).with_context(|| format!("write {golden}"))?;
        println!("Wrote {}", golden);
    }
    Ok(())
}

/// Every built-in audit must carry the metadata `explain` and the report rely on.
fn explain_coverage() -> anyhow::Result<()> {
    let registry = pagelint_domain::AuditRegistry::builtin();
    let mut errors = Vec::new();

    for audit in registry.iter() {
        let meta = &audit.meta;
        if meta.description.is_empty() {
            errors.push(format!("audit '{}' has empty description", meta.name));
        }
        if meta.failure_description.is_empty() {
            errors.push(format!("audit '{}' has empty failure description", meta.name));
        }
        if !meta.help_text.contains("[Learn more](") {
            errors.push(format!("audit '{}' help text has no Learn more link", meta.name));
        }
        if meta.required_artifacts.is_empty() {
            errors.push(format!("audit '{}' declares no required artifacts", meta.name));
        }
    }

    if errors.is_empty() {
        println!("✓ {} built-in audits have complete metadata", registry.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden reports against the report schema");
    eprintln!("  update-fixtures   Regenerate tests/fixtures/*/expected.report.json");
    eprintln!("  explain-coverage  Validate built-in audit metadata");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "update-fixtures" => update_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
