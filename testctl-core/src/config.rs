//! Generator configuration.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the built-in setup:
//!
//! ```yaml
//! source_root: .
//! template: debian/tests/control.in
//! output: debian/tests/control
//! native:
//!   command: [bin/diffoscope, --list-debian-substvars]
//!   key: "diffoscope:Recommends"
//! interpreter:
//!   command: [python3, debian/tests/generate-recommends.py]
//! ```
//!
//! Relative `template` and `output` paths resolve against `source_root`.
//! Both query commands run with `source_root` as their working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TEMPLATE: &str = "debian/tests/control.in";
pub const DEFAULT_OUTPUT: &str = "debian/tests/control";
pub const DEFAULT_NATIVE_KEY: &str = "diffoscope:Recommends";

// ---------------------------------------------------------------------------
// Query configuration
// ---------------------------------------------------------------------------

/// Command whose whole stdout is a recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Program followed by its arguments.
    pub command: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            command: vec![
                "python3".to_string(),
                "debian/tests/generate-recommends.py".to_string(),
            ],
        }
    }
}

/// Command emitting `key=value` lines; one key carries the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeQueryConfig {
    pub command: Vec<String>,
    pub key: String,
}

impl Default for NativeQueryConfig {
    fn default() -> Self {
        Self {
            command: vec![
                "bin/diffoscope".to_string(),
                "--list-debian-substvars".to_string(),
            ],
            key: DEFAULT_NATIVE_KEY.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Where to read, where to write, and which collaborators to ask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub source_root: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub native: NativeQueryConfig,
    pub interpreter: QueryConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("."),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            native: NativeQueryConfig::default(),
            interpreter: QueryConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration rooted at `source_root`.
    pub fn at(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            ..Self::default()
        }
    }

    /// Template path resolved against the source root.
    pub fn template_path(&self) -> PathBuf {
        self.source_root.join(&self.template)
    }

    /// Output path resolved against the source root.
    pub fn output_path(&self) -> PathBuf {
        self.source_root.join(&self.output)
    }

    /// Reject configurations that cannot spawn their queries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.native.command.is_empty() {
            return Err(ConfigError::EmptyCommand { query: "native" });
        }
        if self.interpreter.command.is_empty() {
            return Err(ConfigError::EmptyCommand {
                query: "interpreter",
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load a [`GeneratorConfig`] from a YAML file.
///
/// Returns `ConfigError::ConfigNotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed YAML.
pub fn load(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GeneratorConfig =
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
