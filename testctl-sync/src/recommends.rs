//! External recommendation queries.
//!
//! Two collaborators feed the placeholders:
//!
//! - **native**: a tool emitting `key=value` substvar lines; the value of one
//!   key is the list (`diffoscope --list-debian-substvars`).
//! - **interpreter**: a script whose whole stdout is the list.
//!
//! Queries never abort a run. Spawn failures, non-zero exits, empty output
//! and a missing key all degrade to an empty [`RecommendationList`] with a
//! `warn!` line.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use testctl_core::{GeneratorConfig, RecommendationList, Recommends};

// ---------------------------------------------------------------------------
// QueryError
// ---------------------------------------------------------------------------

/// Why a query produced nothing. Logged, never propagated past [`RecommendsQuery::recommends`].
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Exit { program: String, status: String },

    #[error("no `{key}` line in output")]
    KeyNotFound { key: String },
}

// ---------------------------------------------------------------------------
// RecommendsQuery
// ---------------------------------------------------------------------------

/// Source of one recommendation list.
pub trait RecommendsQuery {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    /// Run the query and return the raw list text.
    fn query(&self) -> Result<String, QueryError>;

    /// Run the query, degrading every failure to an empty list.
    fn recommends(&self) -> RecommendationList {
        match self.query() {
            Ok(raw) => {
                let list = RecommendationList::from(raw);
                if list.is_empty() {
                    tracing::warn!("{} query returned no recommendations", self.name());
                } else {
                    tracing::debug!(
                        "{} query returned {} package(s)",
                        self.name(),
                        list.packages().count()
                    );
                }
                list
            }
            Err(err) => {
                tracing::warn!("{} query failed, substituting nothing: {err}", self.name());
                RecommendationList::empty()
            }
        }
    }
}

/// Run `command` in `cwd` and return its stdout.
///
/// A relative program path containing a separator is resolved against `cwd`,
/// so `bin/tool` means `<cwd>/bin/tool` even when `cwd` is itself relative.
fn run_command(command: &[String], cwd: &Path) -> Result<String, QueryError> {
    let Some((program, args)) = command.split_first() else {
        return Err(QueryError::Spawn {
            program: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    let program_path = Path::new(program);
    let resolved: PathBuf = if program_path.is_relative() && program_path.components().count() > 1 {
        let base = std::path::absolute(cwd).map_err(|source| QueryError::Spawn {
            program: program.clone(),
            source,
        })?;
        base.join(program_path)
    } else {
        program_path.to_path_buf()
    };

    tracing::debug!("running {} {:?} in {}", resolved.display(), args, cwd.display());
    let output = Command::new(&resolved)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|source| QueryError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::debug!("{program} stderr: {}", stderr.trim_end());
        }
        return Err(QueryError::Exit {
            program: program.clone(),
            status: output.status.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// ---------------------------------------------------------------------------
// NativeQuery
// ---------------------------------------------------------------------------

/// Reads the value of one `key=value` line from a substvars listing.
#[derive(Debug, Clone)]
pub struct NativeQuery {
    command: Vec<String>,
    key: String,
    cwd: PathBuf,
}

impl NativeQuery {
    pub fn new(command: Vec<String>, key: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command,
            key: key.into(),
            cwd: cwd.into(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.native.command.clone(),
            config.native.key.clone(),
            config.source_root.clone(),
        )
    }
}

/// Value of the first `key=value` line whose key matches.
pub fn extract_substvar<'a>(output: &'a str, key: &str) -> Option<&'a str> {
    output.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        (k.trim() == key).then(|| v.trim())
    })
}

impl RecommendsQuery for NativeQuery {
    fn name(&self) -> &str {
        "native"
    }

    fn query(&self) -> Result<String, QueryError> {
        let stdout = run_command(&self.command, &self.cwd)?;
        extract_substvar(&stdout, &self.key)
            .map(str::to_owned)
            .ok_or_else(|| QueryError::KeyNotFound {
                key: self.key.clone(),
            })
    }
}

// ---------------------------------------------------------------------------
// InterpreterQuery
// ---------------------------------------------------------------------------

/// Uses the entire stdout of a generator script.
#[derive(Debug, Clone)]
pub struct InterpreterQuery {
    command: Vec<String>,
    cwd: PathBuf,
}

impl InterpreterQuery {
    pub fn new(command: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command,
            cwd: cwd.into(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.interpreter.command.clone(), config.source_root.clone())
    }
}

impl RecommendsQuery for InterpreterQuery {
    fn name(&self) -> &str {
        "interpreter"
    }

    fn query(&self) -> Result<String, QueryError> {
        run_command(&self.command, &self.cwd)
    }
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// The pair of queries consulted on every run.
pub struct Collaborators {
    native: Box<dyn RecommendsQuery>,
    interpreter: Box<dyn RecommendsQuery>,
}

impl Collaborators {
    pub fn new(native: Box<dyn RecommendsQuery>, interpreter: Box<dyn RecommendsQuery>) -> Self {
        Self {
            native,
            interpreter,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            Box::new(NativeQuery::from_config(config)),
            Box::new(InterpreterQuery::from_config(config)),
        )
    }

    /// Run native then interpreter, each to completion.
    pub fn resolve(&self) -> Recommends {
        Recommends {
            native: self.native.recommends(),
            interpreter: self.interpreter.recommends(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
