//! `testctl diff` — show the unified diff of what generate would write.

use anyhow::{Context, Result};
use clap::Args;

use testctl_core::GeneratorConfig;
use testctl_sync::{diff, Collaborators};

/// Arguments for `testctl diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {}

impl DiffArgs {
    pub fn run(self, config: &GeneratorConfig) -> Result<()> {
        let collaborators = Collaborators::from_config(config);
        let result = diff(config, &collaborators)
            .with_context(|| format!("diff failed for {}", config.output_path().display()))?;

        match result.unified_diff {
            None => println!("No differences for {}.", result.path.display()),
            Some(unified) => {
                print!("{unified}");
                if !unified.ends_with('\n') {
                    println!();
                }
            }
        }
        Ok(())
    }
}
