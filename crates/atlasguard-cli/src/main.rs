//! CLI entry point for atlasguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and exit
//! codes. All business logic lives in the `atlasguard-app` crate.

use anyhow::Context;
use atlasguard_app::{
    CheckInput, DEFAULT_PARAMS_FILE, ExplainOutput, SchemaKind, format_explanation,
    format_not_found, parameter_args, parse_report_json, render_annotations, render_markdown,
    run_check, run_explain, runtime_error_report, schema_json, serialize_report, to_renderable,
    verdict_exit_code,
};
use atlasguard_settings::Overrides;
use atlasguard_types::AtlasguardReport;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "atlasguard",
    version,
    about = "Pre-deployment guard rails for MongoDB Atlas clusters in CDK apps"
)]
struct Cli {
    /// Construct tree written by `cdk synth`.
    #[arg(long, default_value = atlasguard_tree::DEFAULT_TREE_FILE)]
    tree: Utf8PathBuf,

    /// Path to atlasguard config TOML. A missing file means defaults.
    #[arg(long, default_value = "atlasguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict|advisory).
    #[arg(long)]
    profile: Option<String>,

    /// Override which severity fails the run (error|warning|never).
    #[arg(long)]
    fail_on: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Override the maximum number of clusters per stage.
    #[arg(long)]
    max_cluster_count: Option<u32>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the guard rails and write artifacts.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/atlasguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/atlasguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/atlasguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/atlasguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "atlas.cluster_count") or code (e.g., "backup_disabled").
        identifier: String,
    },

    /// Print `cdk deploy` parameter arguments from a JSON parameter file.
    Params {
        /// JSON object of parameter names to values.
        #[arg(long, short, default_value = DEFAULT_PARAMS_FILE)]
        config: Utf8PathBuf,

        /// Extra arguments appended after the parameters (pass after `--`).
        #[arg(last = true)]
        cdk_args: Vec<String>,
    },

    /// Print the JSON Schema of the config file or the report.
    Schema {
        #[arg(value_enum)]
        kind: SchemaArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaArg {
    Config,
    Report,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.cmd {
        Commands::Check {
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Params { config, cdk_args } => cmd_params(&config, &cdk_args),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(fallback_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_check(
    cli: &Cli,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_optional(&cli.config)?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            fail_on: cli.fail_on.clone(),
            max_findings: cli.max_findings,
            max_cluster_count: cli.max_cluster_count,
        };

        let output = run_check(CheckInput {
            tree_path: &cli.tree,
            config_text: &cfg_text,
            overrides,
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;
        info!(path = %report_out, "wrote report");

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict.status))
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
            if let Err(write_err) = write_report_file(report_out, &report) {
                error!(error = %write_err, "could not write runtime error report");
            }
            eprintln!("atlasguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Read a file that is allowed to be absent.
fn read_optional(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(%path, "config file not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn write_report_file(path: &Utf8Path, report: &AtlasguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
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

fn read_report(report_path: &Utf8Path) -> anyhow::Result<AtlasguardReport> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            guard_rails,
        } => {
            eprint!("{}", format_not_found(&identifier, guard_rails));
            std::process::exit(1);
        }
    }
}

fn cmd_params(path: &Utf8Path, cdk_args: &[String]) -> anyhow::Result<()> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => anyhow::bail!(
            "parameter file not found at {path}; copy config/atlas-parameters.example.json \
             to {DEFAULT_PARAMS_FILE} and update the values, or pass a file with --config"
        ),
        Err(err) => return Err(err).with_context(|| format!("read parameter file {path}")),
    };
    let args = parameter_args(&text).with_context(|| format!("parameter file {path}"))?;
    info!(%path, parameters = args.len() / 2, "converted parameter file");

    for arg in args.iter().chain(cdk_args) {
        println!("{arg}");
    }
    Ok(())
}

fn cmd_schema(kind: SchemaArg) -> anyhow::Result<()> {
    let kind = match kind {
        SchemaArg::Config => SchemaKind::Config,
        SchemaArg::Report => SchemaKind::Report,
    };
    println!("{}", schema_json(kind)?);
    Ok(())
}
