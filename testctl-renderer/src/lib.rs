//! # testctl-renderer
//!
//! Renders the generated autopkgtest control file: a Tera-rendered
//! do-not-edit header, the template body, placeholder substitution and the
//! fixed replacement rules.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use testctl_core::Recommends;
//! use testctl_renderer::{load_template, Renderer};
//!
//! fn render(root: &Path, recommends: &Recommends) {
//!     if let (Ok(renderer), Ok(template)) = (
//!         Renderer::new(),
//!         load_template(root, Path::new("debian/tests/control.in")),
//!     ) {
//!         if let Ok(text) = renderer.render(&template, recommends) {
//!             print!("{text}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::HeaderContext;
pub use engine::{load_template, substitute, Renderer, HEADER_LINES};
pub use error::RenderError;
