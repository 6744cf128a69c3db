use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::path::Path;

use super::functions::FunctionRegistry;
use crate::error::Error;

/// How an artifact is treated once rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Generated source code. The template's first line is a toolchain
    /// directive that keeps the template itself out of compilation and is
    /// stripped before parsing. The output is reconciled section by section
    /// against any existing file.
    Code,
    /// Examples, snippets and documents. Parsed in full and overwritten on
    /// every run.
    Document,
}

/// A template's source text together with the kind of artifact it renders.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    /// Name used in error messages, relative to the templates directory
    pub name: String,
    /// Raw template text as read from disk
    pub source: String,
    pub kind: ArtifactKind,
}

impl TemplateSource {
    pub fn new(name: impl Into<String>, source: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            kind,
        }
    }

    /// Read `templates_dir/name`.
    pub fn load(templates_dir: &Path, name: &str, kind: ArtifactKind) -> Result<Self, Error> {
        let path = templates_dir.join(name);
        let source = std::fs::read_to_string(&path).map_err(|e| Error::fs("read", &path, e))?;
        Ok(Self::new(name, source, kind))
    }

    /// The text handed to the template parser.
    pub fn body(&self) -> &str {
        match self.kind {
            ArtifactKind::Code => self.source.split_once('\n').map_or("", |(_, rest)| rest),
            ArtifactKind::Document => &self.source,
        }
    }
}

/// Template failure, split by phase.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The template source is malformed
    #[error("{0}")]
    Parse(minijinja::Error),
    /// Rendering failed, including explicit `fail(...)` aborts
    #[error("{0}")]
    Execution(minijinja::Error),
}

impl RenderError {
    /// Attach the template name and schema name for run-level reporting.
    pub fn into_error(self, template: &str, schema: &str) -> Error {
        match self {
            RenderError::Parse(source) => Error::TemplateParse {
                template: template.to_string(),
                source,
            },
            RenderError::Execution(source) => Error::TemplateExecution {
                template: template.to_string(),
                schema: schema.to_string(),
                source,
            },
        }
    }
}

/// Render `template` against `data` with the functions in `registry`.
///
/// Undefined variables are errors. Block tags swallow their own line, and a
/// trailing newline in the template is kept in the output.
pub fn render<S: Serialize>(
    registry: &FunctionRegistry,
    template: &TemplateSource,
    data: &S,
) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    registry.install(&mut env);

    let tmpl = env
        .template_from_named_str(&template.name, template.body())
        .map_err(RenderError::Parse)?;
    tmpl.render(data).map_err(RenderError::Execution)
}
