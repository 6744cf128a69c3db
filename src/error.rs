//! Run-level error taxonomy.
//!
//! Every variant is fatal to a generation run. Each one carries enough
//! context (file path, schema name, template name) to locate the cause
//! without re-running with extra logging.

use std::io;
use std::path::PathBuf;

use crate::schema::ValidationRule;

/// Errors produced by a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A schema document is not well-formed YAML or does not match the model.
    #[error("failed to parse schema {}: {source}", path.display())]
    SchemaParse {
        /// Schema file that failed to parse
        path: PathBuf,
        /// Underlying deserializer error
        #[source]
        source: serde_yaml::Error,
    },

    /// A schema document parsed but violates a structural invariant.
    #[error("invalid schema {}: attribute '{attribute}': {rule}", path.display())]
    SchemaValidation {
        /// Schema file containing the offending attribute
        path: PathBuf,
        /// Dotted external-name path of the offending attribute
        attribute: String,
        /// The violated invariant
        rule: ValidationRule,
    },

    /// A template source is syntactically malformed.
    #[error("failed to parse template '{template}': {source}")]
    TemplateParse {
        /// Template name (relative to the templates directory)
        template: String,
        /// Underlying template engine error
        #[source]
        source: minijinja::Error,
    },

    /// A template failed while rendering against a specific schema, including
    /// explicit `fail(...)` aborts.
    #[error("failed to render template '{template}' for '{schema}': {source}")]
    TemplateExecution {
        /// Template name (relative to the templates directory)
        template: String,
        /// Human name of the schema unit being rendered, or `<aggregate>`
        schema: String,
        /// Underlying template engine error
        #[source]
        source: minijinja::Error,
    },

    /// An input could not be read or an output could not be written.
    #[error("failed to {action} {}: {source}", path.display())]
    FileSystem {
        /// What was being attempted (`read`, `write`, `list`, `create`)
        action: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Two (schema, template) pairs resolved to the same output file.
    #[error("output {} is produced by both '{first}' and '{second}'", path.display())]
    DuplicateOutput {
        /// Colliding output path
        path: PathBuf,
        /// Schema that claimed the path first
        first: String,
        /// Schema that collided with it
        second: String,
    },

    /// The generator configuration file is malformed.
    #[error("failed to parse generator config {}: {source}", path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;
