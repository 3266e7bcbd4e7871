//! Domain types for control-file generation.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// Template text read once from disk, kept together with its source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    path: PathBuf,
    body: String,
}

impl Template {
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

/// A literal marker in the template that is replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Runtime dependencies reported by the tool itself.
    NativeRecommends,
    /// Interpreter-level optional dependencies.
    InterpreterRecommends,
}

impl Placeholder {
    /// Substitution order.
    pub fn all() -> &'static [Placeholder] {
        &[Placeholder::NativeRecommends, Placeholder::InterpreterRecommends]
    }

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::NativeRecommends => "%RECOMMENDS%",
            Placeholder::InterpreterRecommends => "%PYRECOMMENDS%",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.token().fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Recommendation lists
// ---------------------------------------------------------------------------

/// Delimited package list as produced by an external query.
///
/// Order is preserved and duplicates are kept. Trailing newlines are
/// stripped, matching shell command substitution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationList(String);

impl RecommendationList {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Individual package names, split on commas and whitespace.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.0
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
    }
}

impl fmt::Display for RecommendationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RecommendationList {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&str> for RecommendationList {
    fn from(s: &str) -> Self {
        Self(s.trim_end_matches(['\n', '\r']).to_owned())
    }
}

/// Both recommendation lists resolved for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recommends {
    pub native: RecommendationList,
    pub interpreter: RecommendationList,
}

impl Recommends {
    /// Value substituted for `placeholder`.
    pub fn value_for(&self, placeholder: Placeholder) -> &RecommendationList {
        match placeholder {
            Placeholder::NativeRecommends => &self.native,
            Placeholder::InterpreterRecommends => &self.interpreter,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
