//! testctl — generate `debian/tests/control` from its template.
//!
//! # Usage
//!
//! ```text
//! testctl [generate] [--dry-run]
//! testctl diff
//! testctl check [--json]
//!
//! global: [--config <file>] [--source-root <dir>] [--template <path>] [--output <path>] [-v]
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use commands::{check::CheckArgs, diff::DiffArgs, generate::GenerateArgs};
use testctl_core::{config, GeneratorConfig};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "testctl",
    version,
    about = "Generate the Debian autopkgtest control file from its template",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Log progress (same as RUST_LOG=info).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the template and write the control file (default).
    Generate(GenerateArgs),

    /// Show a unified diff of what generate would write.
    Diff(DiffArgs),

    /// Exit non-zero if the control file is missing or out of date.
    Check(CheckArgs),
}

// ---------------------------------------------------------------------------
// Shared configuration arguments
// ---------------------------------------------------------------------------

/// Overrides layered on top of the built-in or file configuration.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory the queries run in; template and output resolve against it.
    #[arg(long, global = true)]
    pub source_root: Option<PathBuf>,

    /// Template path.
    #[arg(long, global = true)]
    pub template: Option<PathBuf>,

    /// Output path.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(root) = &self.source_root {
            cfg.source_root = root.clone();
        }
        if let Some(template) = &self.template {
            cfg.template = template.clone();
        }
        if let Some(output) = &self.output {
            cfg.output = output.clone();
        }
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.resolve()?;
    match cli.command {
        None => GenerateArgs::default().run(&config).map(|()| ExitCode::SUCCESS),
        Some(Commands::Generate(args)) => args.run(&config).map(|()| ExitCode::SUCCESS),
        Some(Commands::Diff(args)) => args.run(&config).map(|()| ExitCode::SUCCESS),
        Some(Commands::Check(args)) => args.run(&config),
    }
}
