//! Dry-run unified diff and freshness check.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use similar::TextDiff;

use testctl_core::GeneratorConfig;

use crate::error::io_err;
use crate::pipeline;
use crate::recommends::Collaborators;
use crate::SyncError;

/// Diff of the rendered control file against the one on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    pub path: PathBuf,
    /// `None` when the file is already current.
    pub unified_diff: Option<String>,
}

/// Whether the on-disk output matches what `generate` would write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    Current,
    Stale,
    Missing,
}

impl Freshness {
    pub fn is_current(self) -> bool {
        self == Freshness::Current
    }
}

/// Render what `generate` would write and compare it to the current file.
///
/// No files are written. A missing output is diffed against empty text.
pub fn diff(config: &GeneratorConfig, collaborators: &Collaborators) -> Result<DiffResult, SyncError> {
    let rendered = pipeline::render_output(config, collaborators)?;
    let path = config.output_path();
    let existing = read_existing(&path)?.unwrap_or_default();

    if existing == rendered.content {
        return Ok(DiffResult {
            path,
            unified_diff: None,
        });
    }

    let shown = config.output.display().to_string().replace('\\', "/");
    let old_header = format!("a/{shown}");
    let new_header = format!("b/{shown}");
    let unified = TextDiff::from_lines(&existing, &rendered.content)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(DiffResult {
        path,
        unified_diff: Some(unified),
    })
}

/// Classify the on-disk output without writing anything.
pub fn check(config: &GeneratorConfig, collaborators: &Collaborators) -> Result<Freshness, SyncError> {
    let rendered = pipeline::render_output(config, collaborators)?;
    let freshness = match read_existing(&config.output_path())? {
        None => Freshness::Missing,
        Some(existing) if existing == rendered.content => Freshness::Current,
        Some(_) => Freshness::Stale,
    };
    tracing::debug!("{}: {freshness:?}", config.output_path().display());
    Ok(freshness)
}

fn read_existing(path: &Path) -> Result<Option<String>, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}
