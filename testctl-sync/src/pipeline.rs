//! Shared render entrypoint used by `generate`, `diff` and `check`.

use testctl_core::{GeneratorConfig, Recommends};
use testctl_renderer::{load_template, Renderer};

use crate::recommends::Collaborators;
use crate::SyncError;

/// Fully rendered output plus the lists that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content: String,
    pub recommends: Recommends,
}

/// Read the template, resolve recommendations, render.
///
/// The template is read before any query runs, so a missing template aborts
/// without spawning anything.
pub fn render_output(
    config: &GeneratorConfig,
    collaborators: &Collaborators,
) -> Result<Rendered, SyncError> {
    config.validate()?;
    let template = load_template(&config.source_root, &config.template)?;
    let recommends = collaborators.resolve();
    let renderer = Renderer::new()?;
    let content = renderer.render(&template, &recommends)?;
    Ok(Rendered {
        content,
        recommends,
    })
}
