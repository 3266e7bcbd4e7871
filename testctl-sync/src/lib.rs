//! # testctl-sync
//!
//! Recommendation queries, atomic writer and diff/check support.
//!
//! Call [`generate`] to render and write the control file, [`diff`] to see
//! what would change, or [`check`] to classify the file on disk.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod recommends;
pub mod writer;

pub use diff::{check, diff, DiffResult, Freshness};
pub use error::SyncError;
pub use recommends::{Collaborators, InterpreterQuery, NativeQuery, QueryError, RecommendsQuery};
pub use writer::{atomic_write, generate, GenerateResult, WriteResult};
