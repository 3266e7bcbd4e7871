//! testctl core library — domain types, replacement rules, configuration, errors.
//!
//! - [`types`] — template, placeholders, recommendation lists
//! - [`rules`] — ordered whole-text replacement rules
//! - [`config`] — [`GeneratorConfig`] and YAML loading
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod rules;
pub mod types;

pub use config::{GeneratorConfig, NativeQueryConfig, QueryConfig};
pub use error::ConfigError;
pub use rules::{ReplacementRule, RuleKind, RuleSet};
pub use types::{Placeholder, RecommendationList, Recommends, Template};
