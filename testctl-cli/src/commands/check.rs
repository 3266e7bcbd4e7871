//! `testctl check` — fail when the control file is missing or out of date.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use testctl_core::GeneratorConfig;
use testctl_sync::{check, Collaborators, Freshness};

/// Arguments for `testctl check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReportJson {
    output: PathBuf,
    status: Freshness,
}

impl CheckArgs {
    /// Report freshness; the exit code is 1 unless the output is current.
    pub fn run(self, config: &GeneratorConfig) -> Result<ExitCode> {
        let collaborators = Collaborators::from_config(config);
        let freshness = check(config, &collaborators)
            .with_context(|| format!("check failed for {}", config.output_path().display()))?;
        let output = config.output_path();

        if self.json {
            let report = CheckReportJson {
                output: output.clone(),
                status: freshness,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            let label = match freshness {
                Freshness::Current => "current".green(),
                Freshness::Stale => "stale".red(),
                Freshness::Missing => "missing".red(),
            };
            println!("{}: {label}", output.display());
            if !freshness.is_current() {
                println!("Run `testctl generate` to update it.");
            }
        }

        Ok(if freshness.is_current() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        })
    }
}
