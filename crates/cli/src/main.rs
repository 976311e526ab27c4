use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use docs_verifier_core::{render_footer, render_header, render_report, verify, VerifierConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "docs-verifier",
    version,
    about = "Check that a documentation directory holds its required files and key sections."
)]
struct Cli {
    /// Base directory the documentation directory is resolved against.
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Documentation directory, relative to --root (overrides the config).
    #[arg(long, value_name = "DIR")]
    docs_dir: Option<PathBuf>,

    /// JSON file describing required files, marker checks and usage hints.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the verification report as JSON.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => VerifierConfig::load(path)?,
        None => VerifierConfig::default(),
    };
    if let Some(docs_dir) = cli.docs_dir {
        config.docs_dir = docs_dir;
    }

    print!("{}", render_header(&config));
    let report = verify(&config, &cli.root);
    print!("{}", render_report(&report));
    print!("{}", render_footer(&config, &report));

    if let Some(output) = cli.report {
        let payload =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        fs::write(&output, payload)
            .with_context(|| format!("failed to write report to {}", output.display()))?;
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
