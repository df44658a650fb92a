//! CLI entry point for pagelint.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `pagelint-app` crate.

mod telemetry;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use pagelint_app::{
    ExplainOutput, RunInput, parse_report_json, render_markdown, report_exit_code, run_audits,
    run_explain, runtime_error_report, serialize_report, to_renderable,
};
use pagelint_settings::Overrides;
use telemetry::{LogFormat, init_tracing};

#[derive(Parser, Debug)]
#[command(
    name = "pagelint",
    version,
    about = "Console-violation audits over captured browser artifacts"
)]
struct Cli {
    /// Path to pagelint config TOML.
    #[arg(long, default_value = "pagelint.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|permissions).
    #[arg(long)]
    profile: Option<String>,

    /// Run only the named audit (repeatable).
    #[arg(long = "audit", value_name = "NAME")]
    only: Vec<String>,

    /// Log output format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate audits against an artifact bundle and write artifacts.
    Run {
        /// Path to the artifact bundle JSON (artifact name -> value).
        #[arg(long)]
        artifacts: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/pagelint/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/pagelint/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/pagelint/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain an audit: what it looks for and how to fix it.
    Explain {
        /// The audit name (e.g., "notification-on-start").
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.cmd {
        Commands::Run {
            ref artifacts,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_run(&cli, artifacts, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { ref name } => cmd_explain(&cli, name),
    }
}

fn cmd_run(
    cli: &Cli,
    artifacts: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;

        let input = RunInput {
            artifacts_path: artifacts,
            config_text: &cfg_text,
            overrides: Overrides {
                profile: cli.profile.clone(),
                only: cli.only.clone(),
            },
        };

        let output = run_audits(input)?;

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let renderable = to_renderable(&output.report);
            let md = render_markdown(&renderable);
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(report_exit_code(&output.report))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("pagelint error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing config file is allowed (defaults apply); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn write_report_file(
    path: &Utf8Path,
    report: &pagelint_types::PagelintReport,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let md = render_markdown(&renderable);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(cli: &Cli, name: &str) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let cfg = if cfg_text.trim().is_empty() {
        pagelint_settings::PagelintConfigV1::default()
    } else {
        pagelint_settings::parse_config_toml(&cfg_text).context("parse config")?
    };
    let catalog = pagelint_settings::resolve_catalog(&cfg).context("resolve config")?;

    match run_explain(name, &catalog) {
        ExplainOutput::Found(exp) => {
            print!("{}", pagelint_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", pagelint_app::format_not_found(&identifier, &available));
            std::process::exit(1);
        }
    }
}
