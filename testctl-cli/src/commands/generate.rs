//! `testctl generate` — render and write the control file.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use testctl_core::GeneratorConfig;
use testctl_sync::{generate, Collaborators, GenerateResult, WriteResult};

/// Arguments for `testctl generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn run(self, config: &GeneratorConfig) -> Result<()> {
        let collaborators = Collaborators::from_config(config);
        let result = generate(config, &collaborators, self.dry_run).with_context(|| {
            format!(
                "failed to generate {} from {}",
                config.output_path().display(),
                config.template_path().display()
            )
        })?;
        print_result(&result, self.dry_run);
        Ok(())
    }
}

fn print_result(result: &GenerateResult, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let native = result.recommends.native.packages().count();
    let interpreter = result.recommends.interpreter.packages().count();

    match &result.write {
        WriteResult::Written { path } => println!(
            "{prefix}{} {} ({native} native, {interpreter} interpreter recommends)",
            "✎".green(),
            path.display()
        ),
        WriteResult::WouldWrite { path } => println!(
            "{prefix}{} {} ({native} native, {interpreter} interpreter recommends)",
            "~".yellow(),
            path.display()
        ),
        WriteResult::Unchanged { path } => {
            println!("{prefix}{} {} unchanged", "·".dimmed(), path.display())
        }
    }
}
