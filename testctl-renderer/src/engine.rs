//! Control-file rendering — header, placeholder substitution, rule pipeline.
//!
//! # Pipeline
//!
//! 1. Render the do-not-edit header (`templates/header.tera`).
//! 2. Append the template body verbatim.
//! 3. Replace every `%RECOMMENDS%`, then every `%PYRECOMMENDS%`.
//! 4. Fold the [`RuleSet`] over the whole buffer.
//!
//! Steps 3 and 4 operate on the accumulated text, header included.

use std::path::Path;

use tera::Tera;

use testctl_core::{Placeholder, Recommends, RuleSet, Template};

use crate::context::HeaderContext;
use crate::error::RenderError;

const HEADER_TPL: &str = "header.tera";
const HEADER_SRC: &str = include_str!("templates/header.tera");

/// Number of lines the header adds in front of the template body.
pub const HEADER_LINES: usize = 3;

// ---------------------------------------------------------------------------
// Template loading
// ---------------------------------------------------------------------------

/// Read the control template at `source_root.join(template)`.
///
/// The returned [`Template`] keeps `template` as given so the header shows
/// the configured path rather than an absolute one.
pub fn load_template(source_root: &Path, template: &Path) -> Result<Template, RenderError> {
    let path = source_root.join(template);
    let body = std::fs::read_to_string(&path)
        .map_err(|source| RenderError::TemplateUnreadable { path, source })?;
    Ok(Template::new(template, body))
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-backed renderer for the generated control file.
///
/// Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
    rules: RuleSet,
}

impl Renderer {
    /// Renderer with the embedded header and the built-in Debian rules.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_rules(RuleSet::debian())
    }

    pub fn with_rules(rules: RuleSet) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(HEADER_TPL, HEADER_SRC)?;
        Ok(Renderer { tera, rules })
    }

    /// Render the do-not-edit header for `template_path`.
    pub fn render_header(&self, template_path: &Path) -> Result<String, RenderError> {
        let ctx = HeaderContext::for_template(template_path).to_tera_context()?;
        let mut header = self.tera.render(HEADER_TPL, &ctx)?;
        if !header.ends_with('\n') {
            header.push('\n');
        }
        Ok(header)
    }

    /// Produce the full output text. No I/O.
    pub fn render(&self, template: &Template, recommends: &Recommends) -> Result<String, RenderError> {
        let mut text = self.render_header(template.path())?;
        text.push_str(template.body());

        let text = substitute(&text, recommends);
        Ok(self.rules.apply(&text))
    }
}

/// Replace every placeholder occurrence with its recommendation list.
pub fn substitute(text: &str, recommends: &Recommends) -> String {
    let mut out = text.to_owned();
    for placeholder in Placeholder::all() {
        let value = recommends.value_for(*placeholder);
        if !out.contains(placeholder.token()) {
            tracing::debug!("{placeholder} not present in template");
            continue;
        }
        out = out.replace(placeholder.token(), value.as_str());
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use testctl_core::RecommendationList;

    fn recommends(native: &str, interpreter: &str) -> Recommends {
        Recommends {
            native: RecommendationList::from(native),
            interpreter: RecommendationList::from(interpreter),
        }
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded header");
    }

    #[test]
    fn header_is_three_lines_naming_template() {
        let renderer = Renderer::new().unwrap();
        let header = renderer
            .render_header(Path::new("debian/tests/control.in"))
            .unwrap();
        assert_eq!(header.lines().count(), HEADER_LINES);
        assert_eq!(
            header,
            "# DON'T MANUALLY MODIFY!\n# EDIT debian/tests/control.in INSTEAD!\n#\n"
        );
    }

    #[test]
    fn substitutes_every_occurrence() {
        let out = substitute(
            "A: %RECOMMENDS%\nB: %RECOMMENDS%\nC: %PYRECOMMENDS%\n",
            &recommends("foo, bar", "python3-baz"),
        );
        assert_eq!(out, "A: foo, bar\nB: foo, bar\nC: python3-baz\n");
    }

    #[test]
    fn empty_recommends_leave_nothing_behind() {
        let out = substitute("Depends: %RECOMMENDS%, %PYRECOMMENDS%\n", &Recommends::default());
        assert_eq!(out, "Depends: , \n");
    }

    #[test]
    fn rules_see_substituted_lists() {
        let renderer = Renderer::new().unwrap();
        let template = Template::new("control.in", "Depends: %RECOMMENDS%, zstd\n");
        let out = renderer
            .render(&template, &recommends("aapt, radare2, xz-utils", ""))
            .unwrap();
        assert!(out.ends_with("Depends: xz-utils, zstd\n"), "got:\n{out}");
    }

    #[test]
    fn custom_rules_replace_defaults() {
        let renderer = Renderer::with_rules(RuleSet::default()).unwrap();
        let template = Template::new("control.in", "Depends: aapt, zstd\n");
        let out = renderer.render(&template, &Recommends::default()).unwrap();
        assert!(out.contains("aapt, "));
    }

    #[test]
    fn no_crlf_introduced_by_header() {
        let renderer = Renderer::new().unwrap();
        let header = renderer.render_header(Path::new("control.in")).unwrap();
        assert!(!header.contains('\r'));
    }
}
