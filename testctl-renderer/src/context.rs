//! Header context — serializable payload for the do-not-edit banner.

use std::path::Path;

use serde::Serialize;

use crate::error::RenderError;

/// Values available to `header.tera`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderContext {
    /// Template path as configured, shown to whoever opens the output.
    pub template: String,
}

impl HeaderContext {
    pub fn for_template(path: &Path) -> Self {
        HeaderContext {
            template: path.to_string_lossy().replace('\\', "/"),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
